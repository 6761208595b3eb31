//! Help content for the ETL pipeline exercises (chapter 3).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "3.1.1",
        hint: "Utilisez pd.read_csv('chemin/fichier.csv'). Le fichier sera dans le dossier data_etl/",
        solution: r#"# Extract - Lire le fichier CSV des ventes
df_ventes = pd.read_csv('data_etl/ventes.csv')

print(f"📊 Ventes extraites: {len(df_ventes)} lignes")
print("📋 Colonnes:", list(df_ventes.columns))
print("\n🔍 Aperçu:")
print(df_ventes.head())"#,
        explanation: "pd.read_csv() lit un fichier CSV et le convertit en DataFrame. Vérifiez toujours la structure après extraction.",
    },
    HelpRecord {
        identifier: "3.1.2",
        hint: "Utilisez pd.read_json('chemin/fichier.json'). Les données JSON peuvent avoir une structure complexe.",
        solution: r#"# Extract - Lire le fichier JSON des clients
df_clients = pd.read_json('data_etl/clients.json')

print(f"👥 Clients extraits: {len(df_clients)} lignes")
print("📋 Colonnes:", list(df_clients.columns))
print("\n🔍 Aperçu:")
print(df_clients.head())"#,
        explanation: "pd.read_json() convertit les données JSON en DataFrame. JSON peut contenir des structures imbriquées.",
    },
    HelpRecord {
        identifier: "3.2.1",
        hint: "Utilisez .dropna(), .fillna(), .astype() pour nettoyer. pd.to_datetime() pour les dates.",
        solution: r#"# Transform - Nettoyer les données de ventes
df_ventes_clean = df_ventes.copy()

# Supprimer les lignes avec des valeurs manquantes critiques
df_ventes_clean = df_ventes_clean.dropna(subset=['produit', 'prix'])

# Convertir les dates
df_ventes_clean['date'] = pd.to_datetime(df_ventes_clean['date'])

# Nettoyer les prix (convertir en float)
df_ventes_clean['prix'] = pd.to_numeric(df_ventes_clean['prix'], errors='coerce')

# Supprimer les prix invalides
df_ventes_clean = df_ventes_clean.dropna(subset=['prix'])

print(f"🧹 Données nettoyées: {len(df_ventes_clean)} lignes (était {len(df_ventes)})")"#,
        explanation: "Transform nettoie et transforme les données: suppression des nulls, conversion de types, validation.",
    },
    HelpRecord {
        identifier: "3.2.2",
        hint: "Utilisez les mêmes techniques de nettoyage. Attention aux données clients qui peuvent être plus complexes.",
        solution: r#"# Transform - Nettoyer les données clients
df_clients_clean = df_clients.copy()

# Supprimer les doublons basés sur l'email
df_clients_clean = df_clients_clean.drop_duplicates(subset=['email'], keep='first')

# Nettoyer les âges (valeurs raisonnables)
df_clients_clean = df_clients_clean[(df_clients_clean['age'] >= 18) & (df_clients_clean['age'] <= 100)]

# Nettoyer les noms (pas de valeurs vides)
df_clients_clean = df_clients_clean.dropna(subset=['nom', 'email'])

print(f"👥 Clients nettoyés: {len(df_clients_clean)} lignes (était {len(df_clients)})")"#,
        explanation: "Nettoyage spécifique aux clients: suppression doublons, validation âges, données obligatoires.",
    },
    HelpRecord {
        identifier: "3.3.2",
        hint: "Utilisez .to_json() avec les paramètres orient et indent pour un JSON lisible.",
        solution: r#"# Load - Sauvegarder en JSON
# Fusion des données pour créer un dataset complet
df_final = df_ventes_clean.merge(df_clients_clean, left_on='client_id', right_on='id', how='inner')

# Sauvegarder en JSON avec formatage
output_json = 'data_etl/rapport_final.json'
df_final.to_json(output_json, orient='records', indent=2, date_format='iso')

print(f"💾 Données sauvegardées en JSON: {output_json}")
print(f"📊 {len(df_final)} enregistrements dans le fichier final")"#,
        explanation: "to_json() sauvegarde un DataFrame en JSON. orient='records' crée un format liste de dictionnaires.",
    },
    HelpRecord {
        identifier: "3.4.1",
        hint: "Un pipeline ETL automatise Extract→Transform→Load. Structurez avec des phases claires et mesurez les performances.",
        solution: r#"def pipeline_etl():
    """Pipeline ETL complet automatisé"""
    import time
    start_time = time.time()
    print("🏭 DÉMARRAGE PIPELINE ETL")
    print("="*30)

    # 📥 EXTRACT
    print("📥 Phase EXTRACT...")
    df_ventes = pd.read_csv('data_etl/ventes.csv')
    with open('data_etl/clients.json', 'r', encoding='utf-8') as f:
        data = json.load(f)
    df_clients = pd.DataFrame(data['clients'])

    # 🔄 TRANSFORM
    print("🔄 Phase TRANSFORM...")
    # Ventes
    df_ventes_clean = df_ventes.copy()
    df_ventes_clean['date'] = pd.to_datetime(df_ventes_clean['date'])
    df_ventes_clean['montant_total'] = df_ventes_clean['quantite'] * df_ventes_clean['prix_unitaire']
    df_ventes_clean['mois'] = df_ventes_clean['date'].dt.month
    df_ventes_clean['categorie_prix'] = np.where(
        df_ventes_clean['prix_unitaire'] < 50, 'Économique',
        np.where(df_ventes_clean['prix_unitaire'] < 200, 'Moyen', 'Premium')
    )

    # Clients
    df_clients_clean = df_clients.copy()
    df_clients_clean['nom_complet'] = df_clients_clean['prenom'] + " " + df_clients_clean['nom']
    df_clients_clean['tranche_age'] = np.where(
        df_clients_clean['age'] < 30, 'Jeune',
        np.where(df_clients_clean['age'] < 50, 'Adulte', 'Senior')
    )
    mapping_region = {
        'Paris': 'Nord', 'Lyon': 'Nord',
        'Marseille': 'Sud', 'Nice': 'Sud', 'Toulouse': 'Sud'
    }
    df_clients_clean['region'] = df_clients_clean['ville'].map(mapping_region)

    # 💾 LOAD
    print("💾 Phase LOAD...")
    df_ventes_clean.to_csv('data_etl/ventes_clean.csv', index=False)
    df_clients_clean.to_csv('data_etl/clients_clean.csv', index=False)

    rapport_ventes = {
        'total_ventes': float(df_ventes_clean['montant_total'].sum()),
        'nb_transactions': int(len(df_ventes_clean)),
        'vente_moyenne': float(df_ventes_clean['montant_total'].mean()),
        'date_rapport': datetime.now().isoformat()
    }

    with open('data_etl/rapport_ventes.json', 'w', encoding='utf-8') as f:
        json.dump(rapport_ventes, f, ensure_ascii=False, indent=2)

    # 📊 Métriques
    duree = time.time() - start_time
    metriques = {
        'ventes_lues': len(df_ventes),
        'clients_lus': len(df_clients),
        'ventes_transformees': len(df_ventes_clean),
        'clients_transformes': len(df_clients_clean),
        'fichiers_crees': 3,
        'duree': round(duree, 2)
    }

    print(f"✅ PIPELINE TERMINÉ en {duree:.2f}s")
    return metriques

# Test du pipeline
# metriques = pipeline_etl()
# print("📊 Métriques:", metriques)"#,
        explanation: "Un pipeline ETL structure le processus en 3 phases : Extract (lecture), Transform (nettoyage), Load (sauvegarde). Mesurez les performances et gérez les erreurs.",
    },
];
