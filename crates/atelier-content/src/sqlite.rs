//! Help content for the SQLite exercises (chapter 4).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "4.1.1",
        hint: "Utilisez sqlite3.connect('nom_db.db') pour créer la connexion. N'oubliez pas le .close()",
        solution: r#"# Créer une connexion à la base de données
conn = sqlite3.connect('entreprise.db')
cursor = conn.cursor()

print("✅ Connexion à la base de données établie")
print(f"📁 Fichier de base de données: {os.path.abspath('entreprise.db')}")

# N'oubliez pas de fermer la connexion à la fin
# conn.close()"#,
        explanation: "sqlite3.connect() crée une connexion à une base SQLite. Si le fichier n'existe pas, il sera créé.",
    },
    HelpRecord {
        identifier: "4.1.2",
        hint: "Utilisez CREATE TABLE avec les colonnes et leurs types (INTEGER, TEXT, REAL). PRIMARY KEY pour l'ID.",
        solution: r#"# Créer la table employes
cursor.execute('''
    CREATE TABLE IF NOT EXISTS employes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nom TEXT NOT NULL,
        departement TEXT NOT NULL,
        salaire REAL NOT NULL,
        date_embauche DATE
    )
''')

# Valider les changements
conn.commit()
print("✅ Table 'employes' créée avec succès")"#,
        explanation: "CREATE TABLE définit la structure. IF NOT EXISTS évite les erreurs si la table existe déjà.",
    },
    HelpRecord {
        identifier: "4.2.1",
        hint: "Utilisez INSERT INTO table (colonnes) VALUES (valeurs). Plusieurs façons: une ligne ou plusieurs.",
        solution: r#"# Insérer des données d'exemple
employes_data = [
    ('Alice Martin', 'IT', 45000, '2023-01-15'),
    ('Bob Dupont', 'RH', 38000, '2022-11-03'),
    ('Charlie Dubois', 'Finance', 52000, '2023-03-20'),
    ('Diana Moreau', 'Marketing', 41000, '2022-09-12'),
    ('Eve Laurent', 'IT', 48000, '2023-02-08')
]

cursor.executemany('''
    INSERT INTO employes (nom, departement, salaire, date_embauche)
    VALUES (?, ?, ?, ?)
''', employes_data)

conn.commit()
print(f"✅ {len(employes_data)} employés ajoutés à la base de données")"#,
        explanation: "INSERT INTO ajoute des données. executemany() permet d'insérer plusieurs lignes efficacement.",
    },
    HelpRecord {
        identifier: "4.2.2",
        hint: "Utilisez SELECT avec WHERE pour filtrer. Exemples: WHERE salaire > 40000, WHERE departement = 'IT'",
        solution: r#"# Différentes requêtes SELECT
print("👥 TOUS LES EMPLOYÉS:")
cursor.execute("SELECT * FROM employes")
tous_employes = cursor.fetchall()
for emp in tous_employes:
    print(f"  {emp}")

print("\n💰 EMPLOYÉS BIEN PAYÉS (> 45000):")
cursor.execute("SELECT nom, salaire FROM employes WHERE salaire > 45000")
bien_payes = cursor.fetchall()
for emp in bien_payes:
    print(f"  {emp[0]}: {emp[1]}€")

print("\n💻 EMPLOYÉS IT:")
cursor.execute("SELECT nom, salaire FROM employes WHERE departement = 'IT'")
it_employes = cursor.fetchall()
for emp in it_employes:
    print(f"  {emp[0]}: {emp[1]}€")"#,
        explanation: "SELECT récupère les données. WHERE filtre selon des conditions. fetchall() récupère tous les résultats.",
    },
    HelpRecord {
        identifier: "4.3.1",
        hint: "Utilisez UPDATE SET colonne = valeur WHERE condition. N'oubliez pas le WHERE !",
        solution: r#"# Augmenter les salaires du département IT de 5%
cursor.execute('''
    UPDATE employes
    SET salaire = salaire * 1.05
    WHERE departement = 'IT'
''')

rows_affected = cursor.rowcount
conn.commit()

print(f"✅ {rows_affected} salaires augmentés de 5% dans le département IT")

# Vérifier les changements
cursor.execute("SELECT nom, salaire FROM employes WHERE departement = 'IT'")
nouveaux_salaires = cursor.fetchall()
print("\n💻 Nouveaux salaires IT:")
for emp in nouveaux_salaires:
    print(f"  {emp[0]}: {emp[1]:.2f}€")"#,
        explanation: "UPDATE modifie les données existantes. rowcount indique combien de lignes ont été affectées.",
    },
    HelpRecord {
        identifier: "4.3.2",
        hint: "Utilisez DELETE FROM table WHERE condition. Attention: sans WHERE, toutes les lignes sont supprimées !",
        solution: r#"# Supprimer les employés avec un salaire < 40000
cursor.execute("DELETE FROM employes WHERE salaire < 40000")
rows_deleted = cursor.rowcount
conn.commit()

print(f"❌ {rows_deleted} employés supprimés (salaire < 40000€)")

# Voir les employés restants
cursor.execute("SELECT COUNT(*) FROM employes")
count = cursor.fetchone()[0]
print(f"👥 {count} employés restants dans la base")"#,
        explanation: "DELETE supprime des lignes selon une condition. Toujours utiliser WHERE pour éviter de vider la table.",
    },
    HelpRecord {
        identifier: "4.4.1",
        hint: "Créez des index avec CREATE INDEX nom_index ON table(colonne). IF NOT EXISTS évite les erreurs. EXPLAIN QUERY PLAN montre l'utilisation des index.",
        solution: r#"# Créer des index pour optimiser les performances
cursor = conn.cursor()

# 1. Index sur département (requêtes fréquentes)
cursor.execute("CREATE INDEX IF NOT EXISTS idx_departement ON employes(departement)")

# 2. Index sur salaire (tri et filtres)
cursor.execute("CREATE INDEX IF NOT EXISTS idx_salaire ON employes(salaire)")

# 3. Index composite nom/prenom (recherches nominatives)
cursor.execute("CREATE INDEX IF NOT EXISTS idx_nom_prenom ON employes(nom, prenom)")

conn.commit()

# Test de performance - voir l'utilisation des index
cursor.execute("EXPLAIN QUERY PLAN SELECT * FROM employes WHERE departement = 'IT'")
plan = cursor.fetchall()
print("📊 Plan d'exécution (avec index):")
for step in plan:
    print(f"  {step[3]}")

print("\n✅ Index créés et performance optimisée")
print("🔒 N'oubliez pas: conn.close() pour fermer la connexion")"#,
        explanation: "Les index accélèrent les recherches WHERE, ORDER BY et JOIN. Les index composés optimisent les requêtes multi-colonnes.",
    },
];
