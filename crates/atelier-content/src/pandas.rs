//! Help content and blank scaffolds for the Pandas exercises (chapter 2).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "2.1.1",
        hint: "Utilisez des list comprehensions pour les valeurs aléatoires : [random.randint(min, max) for _ in range(10)]",
        solution: r"noms = ['Alice', 'Bob', 'Charlie', 'Diana', 'Eve', 'Frank', 'Grace', 'Henry', 'Iris', 'Jack']
departements = ['IT', 'RH', 'Finance', 'Marketing', 'Ventes'] * 2
salaires = [random.randint(30000, 80000) for _ in range(10)]
ages = [random.randint(22, 60) for _ in range(10)]",
        explanation: "Les départements sont multipliés par 2 pour avoir 10 éléments. Les list comprehensions génèrent des valeurs aléatoires.",
    },
    HelpRecord {
        identifier: "2.1.2",
        hint: "Syntaxe : df_employes = pd.DataFrame({'colonne1': liste1, 'colonne2': liste2, ...})",
        solution: r"df_employes = pd.DataFrame({
    'nom': noms,
    'departement': departements,
    'salaire': salaires,
    'age': ages
})",
        explanation: "pd.DataFrame() crée un tableau 2D. Chaque clé du dictionnaire devient une colonne.",
    },
    HelpRecord {
        identifier: "2.1.3",
        hint: "Utilisez .head(), .info(), .describe(), .shape sur votre DataFrame",
        solution: r#"# Explorer le DataFrame
print("🔍 Premières lignes:")
print(df_employes.head())

print("\n📊 Informations générales:")
print(df_employes.info())

print("\n📈 Statistiques descriptives:")
print(df_employes.describe())

print("\n📏 Dimensions:")
print(f"Forme: {df_employes.shape}")"#,
        explanation: ".head() montre les premières lignes, .info() les types, .describe() les statistiques, .shape la taille.",
    },
    HelpRecord {
        identifier: "2.2.1",
        hint: "Pour une colonne: df['nom_colonne']. Pour plusieurs: df[['col1', 'col2']]",
        solution: r"# Sélection d'une seule colonne (Series)
noms_seuls = df_employes['nom']

# Sélection d'une colonne avec DataFrame
salaires_seuls = df_employes[['salaire']]

# Sélection de plusieurs colonnes
nom_salaire = df_employes[['nom', 'salaire']]",
        explanation: "Une colonne retourne une Series, plusieurs colonnes retournent un DataFrame.",
    },
    HelpRecord {
        identifier: "2.2.2",
        hint: "Utilisez les opérateurs de comparaison : >, <, ==, !=. Combinez avec & (et) et | (ou)",
        solution: r"# Filtres simples
employes_bien_payes = df_employes[df_employes['salaire'] > 45000]
employes_jeunes = df_employes[df_employes['age'] < 30]

# Filtres par catégorie
employes_it = df_employes[df_employes['departement'] == 'IT']

# Filtres combinés (attention aux parenthèses !)
seniors_it = df_employes[(df_employes['age'] > 35) & (df_employes['departement'] == 'IT')]",
        explanation: "Les filtres pandas utilisent des conditions booléennes. Utilisez & pour 'et', | pour 'ou'.",
    },
    HelpRecord {
        identifier: "2.3.1",
        hint: "Utilisez .groupby('colonne').agg({'autre_colonne': ['mean', 'sum', 'count']})",
        solution: r"# Analyse par département
stats_par_dept = df_employes.groupby('departement').agg({
    'salaire': ['mean', 'min', 'max', 'count'],
    'age': ['mean', 'min', 'max']
}).round(2)

# Salaire moyen par département (Series)
salaire_moyen_dept = df_employes.groupby('departement')['salaire'].mean()",
        explanation: "groupby() groupe les données. agg() applique des fonctions d'agrégation à chaque groupe.",
    },
];

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (
        "2.1.1",
        r"# 📝 ÉTAPE 2.1.1 : Données d'employés
# Créez ces 4 listes avec 10 éléments chacune :
# 1. noms : liste de prénoms
# 2. departements : 5 départements répétés (IT, RH, Finance, Marketing, Ventes)
# 3. salaires : salaires aléatoires entre 30000 et 80000
# 4. ages : âges aléatoires entre 22 et 60

# Exemple pour salaires aléatoires :
# salaires = [random.randint(30000, 80000) for _ in range(10)]

# 👇 Créez vos 4 listes ici :",
    ),
    (
        "2.1.2",
        r"# 📝 ÉTAPE 2.1.2 : DataFrame principal
# Créez un DataFrame 'df_employes' avec pd.DataFrame()
# Utilisez un dictionnaire pour associer noms de colonnes et listes :
# {
#     'nom': noms,
#     'departement': departements,
#     'salaire': salaires,
#     'age': ages
# }

# 👇 Créez votre DataFrame ici :",
    ),
    (
        "2.1.3",
        r#"# 📝 ÉTAPE 2.1.3 : Exploration
# Utilisez ces méthodes sur df_employes :
# 1. .head() - premières lignes
# 2. .info() - informations générales
# 3. .describe() - statistiques
# 4. .shape - forme (pas de parenthèses)

print("🔍 EXPLORATION DU DATAFRAME")
print("="*35)

# 👇 Ajoutez vos explorations ici :"#,
    ),
    (
        "2.2.1",
        r"# 📝 ÉTAPE 2.2.1 : Sélections de colonnes
# Créez ces 3 variables :
# 1. noms_seuls = sélection de la colonne 'nom' uniquement
# 2. salaires_seuls = sélection de la colonne 'salaire' uniquement
# 3. nom_salaire = sélection des colonnes 'nom' ET 'salaire'

# Syntaxe :
# Une colonne : df['colonne']
# Plusieurs colonnes : df[['col1', 'col2']]

# 👇 Créez vos sélections ici :",
    ),
    (
        "2.2.2",
        r"# 📝 ÉTAPE 2.2.2 : Filtres conditionnels
# Créez ces 4 DataFrames filtrés :
# 1. employes_bien_payes = salaire > 50000
# 2. employes_jeunes = age < 30
# 3. employes_it = departement == 'IT'
# 4. seniors_it = (age > 40) ET (departement == 'IT')

# Syntaxe :
# df[df['colonne'] > valeur]
# df[(condition1) & (condition2)]  # ET
# df[(condition1) | (condition2)]  # OU

# 👇 Créez vos filtres ici :",
    ),
    (
        "2.3.1",
        r"# 📝 ÉTAPE 2.3.1 : Groupement par département
# Créez ces analyses :
# 1. stats_par_dept = df_employes.groupby('departement').agg({
#        'salaire': ['mean', 'min', 'max', 'count'],
#        'age': 'mean'
#    })
#
# 2. salaire_moyen_dept = df_employes.groupby('departement')['salaire'].mean()

# 👇 Créez vos analyses ici :",
    ),
];
