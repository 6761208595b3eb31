//! Help content for the Python fundamentals exercises (chapter 1).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "1.1.1",
        hint: r#"Une chaîne de caractères utilise des guillemets : nom = 'Pierre' ou nom = "Pierre""#,
        solution: "nom = 'Pierre'  # Une chaîne de caractères (string)",
        explanation: r#"En Python, on peut utiliser des guillemets simples ' ou doubles " pour créer une chaîne."#,
    },
    HelpRecord {
        identifier: "1.1.2",
        hint: "Un nombre entier s'écrit sans guillemets : age = 25",
        solution: "age = 25  # Un nombre entier (int)",
        explanation: "Les nombres entiers (int) s'écrivent directement sans guillemets. Python les reconnaît automatiquement.",
    },
    HelpRecord {
        identifier: "1.1.3",
        hint: "Un nombre décimal utilise un point : salaire = 45000.50",
        solution: "salaire = 45000.50  # Un nombre décimal (float)",
        explanation: "En Python, on utilise le point (.) pour séparer les décimales, jamais la virgule.",
    },
    HelpRecord {
        identifier: "1.1.4",
        hint: "Une liste se crée avec des crochets : competences = ['Python', 'SQL', 'Docker', 'MongoDB', 'Git']",
        solution: "competences = ['Python', 'SQL', 'Docker', 'MongoDB', 'Git']",
        explanation: "Une liste (list) contient plusieurs éléments entre crochets, séparés par des virgules.",
    },
    HelpRecord {
        identifier: "1.1.5",
        hint: "Un dictionnaire utilise des accolades et des clés : profil = {'nom': nom, 'age': age, ...}",
        solution: r#"profil = {
    "nom": nom,
    "age": age,
    "salaire": salaire,
    "competences": competences
}"#,
        explanation: "Un dictionnaire (dict) associe des clés à des valeurs. On peut utiliser nos variables comme valeurs.",
    },
    HelpRecord {
        identifier: "1.2.1",
        hint: "Utilisez if/elif/else avec les comparaisons < et >=. Python teste les conditions dans l'ordre.",
        solution: r#"def categoriser_age(age):
    if age < 13:
        return "Enfant"
    elif age < 18:
        return "Adolescent"
    elif age < 65:
        return "Adulte"
    else:
        return "Senior""#,
        explanation: "'elif' (else if) permet de tester plusieurs conditions. Python teste dans l'ordre et s'arrête à la première vraie.",
    },
    HelpRecord {
        identifier: "1.2.2",
        hint: "Créez d'abord la liste : ages_test = [10, 15, 25, 45, 70], puis utilisez : for age in ages_test:",
        solution: r#"ages_test = [10, 15, 25, 45, 70]

for age in ages_test:
    categorie = categoriser_age(age)
    print(f"Age {age} est un(e) {categorie}")"#,
        explanation: "Une boucle 'for' itère sur chaque élément d'une liste. On peut utiliser le résultat de la fonction dans la boucle.",
    },
    HelpRecord {
        identifier: "1.3.1",
        hint: "Utilisez append() pour ajouter, insert(position, élément) pour insérer, remove() pour supprimer, sort() pour trier.",
        solution: r#"# 1. Ajouter à la fin
competences.append("Machine Learning")

# 2. Insérer à la position 2
competences.insert(2, "React")

# 3. Supprimer un élément
competences.remove("Git")  # ou competences.pop()

# 4. Trier alphabétiquement
competences.sort()

# 5. Liste avec compétences de plus de 5 caractères
competences_longues = [comp for comp in competences if len(comp) > 5]

print("🔧 Liste modifiée :", competences)
print("📏 Compétences longues :", competences_longues)"#,
        explanation: "Les listes ont des méthodes pour les modifier. List comprehension : [expression for item in liste if condition].",
    },
    HelpRecord {
        identifier: "1.3.2",
        hint: "Utilisez dict[clé] = valeur pour ajouter, dict.update() pour fusionner, dict.items() pour parcourir.",
        solution: r#"# 1. Ajouter expérience
profil["experience"] = 3

# 2. Ajouter langues
profil["langues"] = ["Français", "Anglais", "Espagnol"]

# 3. Augmenter salaire de 10%
profil["salaire"] = profil["salaire"] * 1.10

# 4. Créer dictionnaire contact
contact = {
    "email": "contact@example.com",
    "telephone": "06.12.34.56.78",
    "ville": "Paris"
}

# 5. Fusionner dans profil
profil.update(contact)

print("📋 Profil enrichi :")
for cle, valeur in profil.items():
    print(f"  {cle}: {valeur}")"#,
        explanation: "update() fusionne deux dictionnaires. items() retourne les paires clé-valeur pour l'itération.",
    },
    HelpRecord {
        identifier: "1.4.1",
        hint: "Utilisez isinstance(variable, (int, float)) pour vérifier le type. Gérez ZeroDivisionError pour la division par zéro.",
        solution: r#"def division_securisee(a, b):
    try:
        # Vérification des types
        if not isinstance(a, (int, float)) or not isinstance(b, (int, float)):
            return "❌ Erreur : Les arguments doivent être des nombres"

        # Division
        resultat = a / b
        return f"✅ Résultat : {resultat}"

    except ZeroDivisionError:
        return "❌ Erreur : Division par zéro impossible"
    except Exception as e:
        return f"❌ Erreur inattendue : {e}"

# Tests
print(division_securisee(10, 2))      # ✅ Résultat : 5.0
print(division_securisee(10, 0))      # ❌ Erreur : Division par zéro
print(division_securisee("10", 2))    # ❌ Erreur : Types incorrects"#,
        explanation: "try/except capture les erreurs. isinstance() vérifie le type. Gérez spécifiquement chaque type d'erreur.",
    },
    HelpRecord {
        identifier: "1.5.1",
        hint: "Importez avec import, from...import, ou import...as. Utilisez datetime.now(), random.randint(), math.sqrt().",
        solution: r#"# 1. datetime - Date et heure
import datetime
maintenant = datetime.datetime.now()
print(f"📅 Date/heure actuelles : {maintenant.strftime('%d/%m/%Y %H:%M:%S')}")

# 2. random - Nombres aléatoires
from random import randint
nombres_aleatoires = [randint(1, 100) for _ in range(5)]
print(f"🎲 5 nombres aléatoires : {nombres_aleatoires}")

# 3. math - Fonctions mathématiques
import math as m
racine = m.sqrt(16)
logarithme = m.log(16)
print(f"🔢 √16 = {racine}, ln(16) = {logarithme:.2f}")

# 4. os - Système d'exploitation
from os import getcwd
repertoire = getcwd()
print(f"📁 Répertoire actuel : {repertoire}")"#,
        explanation: "Chaque module offre des fonctionnalités spécialisées. Différentes syntaxes d'import pour différents besoins.",
    },
    HelpRecord {
        identifier: "1.6.1",
        hint: "Une classe définit un modèle. __init__ est le constructeur. self fait référence à l'instance courante.",
        solution: r#"class Employe:
    def __init__(self, nom, prenom, salaire, departement):
        self.nom = nom
        self.prenom = prenom
        self.salaire = salaire
        self.departement = departement

    def se_presenter(self):
        print(f"👋 Je suis {self.prenom} {self.nom}")
        print(f"💼 Département : {self.departement}")
        print(f"💰 Salaire : {self.salaire}€")

    def augmentation(self, pourcentage):
        ancien_salaire = self.salaire
        self.salaire = self.salaire * (1 + pourcentage/100)
        print(f"📈 Augmentation de {pourcentage}% : {ancien_salaire}€ → {self.salaire}€")

    def changer_departement(self, nouveau_dept):
        ancien_dept = self.departement
        self.departement = nouveau_dept
        print(f"🔄 Changement : {ancien_dept} → {nouveau_dept}")

# Test de la classe
emp1 = Employe("Dupont", "Marie", 45000, "IT")
emp1.se_presenter()
emp1.augmentation(10)
emp1.changer_departement("DevOps")"#,
        explanation: "class définit une classe. __init__ initialise les attributs. self représente l'instance. Les méthodes agissent sur l'objet.",
    },
];
