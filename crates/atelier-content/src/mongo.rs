//! Help content for the MongoDB exercises (chapter 6).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "6.1.1",
        hint: "Utilisez MongoClient() pour créer la connexion. Pas besoin d'URL si MongoDB est local.",
        solution: r#"# Connexion à MongoDB (local)
from pymongo import MongoClient

try:
    # Connexion locale par défaut (localhost:27017)
    client = MongoClient()

    # Ou explicitement:
    # client = MongoClient('mongodb://localhost:27017/')

    # Tester la connexion
    client.admin.command('ping')
    print("✅ Connexion à MongoDB réussie")

    # Sélectionner la base de données
    db = client['entreprise_db']
    print(f"📁 Base de données sélectionnée: {db.name}")

except Exception as e:
    print(f"❌ Erreur de connexion: {e}")
    print("💡 Assurez-vous que MongoDB est démarré")"#,
        explanation: "MongoClient() crée une connexion. MongoDB utilise des bases et collections (équivalent des tables SQL).",
    },
    HelpRecord {
        identifier: "6.1.2",
        hint: "Les collections MongoDB sont créées automatiquement lors de la première insertion. Utilisez db['nom_collection'].",
        solution: r#"# Sélectionner/créer une collection
collection = db['employes']

print(f"📦 Collection sélectionnée: {collection.name}")
print("💡 La collection sera créée automatiquement lors de la première insertion")

# Vérifier les collections existantes
collections = db.list_collection_names()
print(f"📋 Collections dans la base: {collections}")"#,
        explanation: "Les collections MongoDB sont créées automatiquement. Pas besoin de définir un schéma à l'avance.",
    },
    HelpRecord {
        identifier: "6.2.1",
        hint: "Utilisez insert_one() pour un document ou insert_many() pour plusieurs. Format: dictionnaire Python.",
        solution: r#"# Insérer des documents (employés)
employes = [
    {
        "nom": "Alice Martin",
        "departement": "IT",
        "salaire": 45000,
        "skills": ["Python", "MongoDB", "Docker"],
        "date_embauche": datetime(2023, 1, 15),
        "actif": True
    },
    {
        "nom": "Bob Dupont",
        "departement": "RH",
        "salaire": 38000,
        "skills": ["Communication", "Recrutement"],
        "date_embauche": datetime(2022, 11, 3),
        "actif": True
    },
    {
        "nom": "Charlie Dubois",
        "departement": "Finance",
        "salaire": 52000,
        "skills": ["Excel", "Analytics", "Budget"],
        "date_embauche": datetime(2023, 3, 20),
        "actif": True
    }
]

# Insérer plusieurs documents
result = collection.insert_many(employes)
print(f"✅ {len(result.inserted_ids)} employés ajoutés")
print(f"🆔 IDs générés: {result.inserted_ids}")"#,
        explanation: "insert_many() ajoute plusieurs documents. MongoDB génère automatiquement des _id uniques.",
    },
    HelpRecord {
        identifier: "6.2.2",
        hint: "Utilisez find() pour tout récupérer, find(query) pour filtrer. Exemples: {'salaire': {'$gt': 40000}}",
        solution: r#"# Différentes requêtes de lecture
print("👥 TOUS LES EMPLOYÉS:")
for employe in collection.find():
    print(f"  {employe['nom']} - {employe['departement']} - {employe['salaire']}€")

print("\n💰 EMPLOYÉS BIEN PAYÉS (> 40000€):")
for employe in collection.find({"salaire": {"$gt": 40000}}):
    print(f"  {employe['nom']}: {employe['salaire']}€")

print("\n💻 EMPLOYÉS IT:")
for employe in collection.find({"departement": "IT"}):
    print(f"  {employe['nom']}: {employe['skills']}")

print("\n🔢 NOMBRE TOTAL D'EMPLOYÉS:")
count = collection.count_documents({})
print(f"  {count} employés dans la collection")"#,
        explanation: "find() récupère les documents. Utilisez les opérateurs MongoDB: $gt (>), $lt (<), $in, etc.",
    },
    HelpRecord {
        identifier: "6.3.1",
        hint: "Utilisez update_many() avec les opérateurs $set, $inc, $push. Format: update_many(filter, update)",
        solution: r#"# Augmenter les salaires du département IT
result = collection.update_many(
    {"departement": "IT"},  # Filtre
    {"$inc": {"salaire": 2000}}  # Augmenter de 2000€
)

print(f"✅ {result.modified_count} salaires augmentés dans le département IT")

# Ajouter une compétence à tous les employés Finance
result2 = collection.update_many(
    {"departement": "Finance"},
    {"$push": {"skills": "PowerBI"}}  # Ajouter à la liste
)

print(f"✅ Compétence PowerBI ajoutée à {result2.modified_count} employés Finance")

# Vérifier les changements
print("\n💻 Nouveaux salaires IT:")
for employe in collection.find({"departement": "IT"}):
    print(f"  {employe['nom']}: {employe['salaire']}€")"#,
        explanation: "update_many() modifie plusieurs documents. $inc incrémente, $push ajoute à un array, $set remplace.",
    },
    HelpRecord {
        identifier: "6.3.2",
        hint: "Utilisez delete_many() avec un filtre. Attention: sans filtre, tous les documents sont supprimés !",
        solution: r#"# Supprimer les employés inactifs (s'il y en a)
result = collection.delete_many({"actif": False})
print(f"❌ {result.deleted_count} employés inactifs supprimés")

# Marquer un employé comme inactif plutôt que le supprimer
collection.update_one(
    {"nom": "Bob Dupont"},
    {"$set": {"actif": False}}
)
print("⚠️ Bob Dupont marqué comme inactif")

# Compter les employés restants actifs
actifs = collection.count_documents({"actif": True})
print(f"👥 {actifs} employés actifs restants")"#,
        explanation: "delete_many() supprime selon un filtre. Préférez marquer comme inactif plutôt que supprimer.",
    },
];
