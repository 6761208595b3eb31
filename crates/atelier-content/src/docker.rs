//! Help content for the Docker exercises (chapter 5).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "5.1.1",
        hint: "Vérifiez l'installation avec `docker --version` et testez avec `docker run hello-world`.",
        solution: r#"# Vérifier l'installation Docker
import subprocess

try:
    result = subprocess.run(['docker', '--version'], capture_output=True, text=True)
    print(f"✅ Docker installé: {result.stdout.strip()}")
    print("\n🚀 Test avec hello-world...")
    result = subprocess.run(['docker', 'run', 'hello-world'], capture_output=True, text=True)
    if result.returncode == 0:
        print("✅ Docker fonctionne correctement!")
    else:
        print(f"❌ Erreur: {result.stderr}")
except FileNotFoundError:
    print("❌ Docker n'est pas installé ou pas dans le PATH")
    print("💡 Installez Docker Desktop depuis https://docker.com")"#,
        explanation: "`docker --version` vérifie l'installation. `docker run hello-world` teste le fonctionnement de base.",
    },
    HelpRecord {
        identifier: "5.1.2",
        hint: "Utilisez `docker ps` pour les conteneurs actifs, `docker ps -a` pour tous les conteneurs.",
        solution: r#"# Explorer les conteneurs Docker
import subprocess

try:
    print("🔍 Conteneurs actifs:")
    result = subprocess.run(['docker', 'ps'], capture_output=True, text=True)
    print(result.stdout or "ℹ️ Aucun conteneur actif")

    print("\n📦 Tous les conteneurs:")
    result = subprocess.run(['docker', 'ps', '-a'], capture_output=True, text=True)
    print(result.stdout)

    print("\n🖼️ Images Docker disponibles:")
    result = subprocess.run(['docker', 'images'], capture_output=True, text=True)
    print(result.stdout)
except Exception as e:
    print(f"❌ Erreur: {e}")"#,
        explanation: "`docker ps` affiche les conteneurs actifs, `docker ps -a` affiche tous les conteneurs, `docker images` liste les images.",
    },
    HelpRecord {
        identifier: "5.2.1",
        hint: "Créez un Dockerfile (FROM, COPY, RUN, CMD) et utilisez une image de base comme `python:3.9`.",
        solution: r#"# Exemple de Dockerfile pour une app Python
dockerfile = '''FROM python:3.9-slim
WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
EXPOSE 8000
CMD ["python", "app.py"]
'''
print(dockerfile)"#,
        explanation: "Un Dockerfile définit comment construire une image ; FROM, COPY, RUN et CMD sont les instructions de base.",
    },
    HelpRecord {
        identifier: "5.2.2",
        hint: "Construisez l'image avec `docker build -t nom_image .` puis listez les images avec `docker images`.",
        solution: r#"# Construire une image Docker (exemple)
import subprocess

try:
    print('🔨 Construction de l\'image...')
    subprocess.run(['docker', 'build', '-t', 'mon-app-python', '.'], check=False)
    print('\n🖼️ Images disponibles:')
    subprocess.run(['docker', 'images'], check=False)
except Exception as e:
    print('❌ Erreur:', e)"#,
        explanation: "`docker build` crée une image à partir d'un Dockerfile ; `-t` spécifie le tag (nom).",
    },
    HelpRecord {
        identifier: "5.3.1",
        hint: "Démarrez un conteneur en arrière-plan avec `docker run -d -p host:container --name nom image`.",
        solution: r#"# Lancer un conteneur en arrière-plan
import subprocess

try:
    subprocess.run(['docker', 'run', '-d', '-p', '8000:8000', '--name', 'mon-conteneur', 'mon-app-python'], check=False)
    subprocess.run(['docker', 'ps'], check=False)
except Exception as e:
    print('❌ Erreur:', e)"#,
        explanation: "`-d` détache le conteneur, `-p` mappe les ports, `--name` donne un nom utile pour l'administration.",
    },
    HelpRecord {
        identifier: "5.4.1",
        hint: "Créez un volume avec `docker volume create <name>` puis montez-le via `docker run -v <name>:<path>` pour tester la persistance.",
        solution: r#"# Exemple simple pour tester la persistance avec un volume
import subprocess

try:
    print('🔧 Création du volume (si nécessaire)')
    subprocess.run(['docker', 'volume', 'create', 'exercice_vol'], check=False)
    print('🚀 Lancement d\'un conteneur qui écrit dans le volume')
    subprocess.run(['docker', 'run', '--rm', '-v', 'exercice_vol:/data', 'busybox', 'sh', '-c', "echo hello > /data/hello.txt"], check=False)
    print('\n📄 Contenu du volume:')
    subprocess.run(['docker', 'run', '--rm', '-v', 'exercice_vol:/data', 'busybox', 'ls', '-la', '/data'], check=False)
except Exception as e:
    print('❌ Erreur:', e)"#,
        explanation: "Les fichiers écrits dans un volume persistent après l'arrêt du conteneur ; utilisez `docker run -v` pour monter.",
    },
];
