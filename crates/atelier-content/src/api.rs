//! Help content for the web API exercises (chapter 7).

use crate::HelpRecord;

pub(crate) const RECORDS: &[HelpRecord] = &[
    HelpRecord {
        identifier: "7.1.1",
        hint: "Comparez les protocoles selon le format, la performance et l'usage : SOAP (XML, enterprise), REST (JSON, web/mobile), GraphQL (JSON, frontends).",
        solution: r#"# Comparaison des protocoles API
comparison = pd.DataFrame({
    'Aspect': ['Format', 'Transport', 'Verbes', 'Structure', 'Performance',
               'Sécurité', 'Cache', 'Complexité', 'Usage'],
    'SOAP': ['XML', 'HTTP/HTTPS/SMTP', 'Actions', 'Envelope/Body', 'Lent',
             'WS-Security', 'Difficile', 'Élevée', 'Enterprise'],
    'REST': ['JSON/XML', 'HTTP', 'GET/POST/PUT/DELETE', 'Resources', 'Rapide',
             'HTTPS/OAuth', 'Excellent', 'Faible', 'Web/Mobile'],
    'GraphQL': ['JSON', 'HTTP', 'Query/Mutation', 'Schema', 'Variable',
                'HTTPS/JWT', 'Complexe', 'Moyenne', 'Frontend']
})

print("🌐 Comparaison des protocoles API :")
print(comparison)"#,
        explanation: "SOAP : protocole complexe, XML, sécurité robuste. REST : simple, léger, JSON, caches HTTP. GraphQL : flexible, query précise, single endpoint. Recommandation : REST pour APIs publiques, GraphQL pour frontends complexes.",
    },
    HelpRecord {
        identifier: "7.1.2",
        hint: "Mémorisez les 6 contraintes REST : Client-Server, Stateless, Cacheable, Uniform Interface, Layered System, Code on Demand.",
        solution: r#"# Les 6 contraintes REST
contraintes = {
    'Client-Server': "Séparation des responsabilités",
    'Stateless': "Chaque requête est indépendante",
    'Cacheable': "Les réponses peuvent être mises en cache",
    'Uniform Interface': "Interface uniforme (HTTP verbs, URIs)",
    'Layered System': "Architecture en couches",
    'Code on Demand': "(Optionnel) Serveur peut envoyer du code"
}

for nom, description in contraintes.items():
    print(f"  {nom}: {description}")"#,
        explanation: "Bonnes pratiques : utilisez les noms de ressources au pluriel, les verbes HTTP appropriés et les codes de statut corrects.",
    },
    HelpRecord {
        identifier: "7.2.1",
        hint: "Utilisez les décorateurs FastAPI : @app.get, @app.post, @app.put, @app.delete sur les routes /users.",
        solution: r#"# Endpoints à implémenter
# @app.get("/")                          - Page d'accueil
# @app.get("/users")                     - Lister utilisateurs
# @app.get("/users/{user_id}")           - Obtenir un utilisateur
# @app.post("/users", status_code=201)   - Créer utilisateur
# @app.put("/users/{user_id}")           - Modifier utilisateur
# @app.delete("/users/{user_id}")        - Supprimer utilisateur

@app.get("/users/{user_id}")
def obtenir_user(user_id: int):
    if user_id not in users:
        raise HTTPException(404, "Utilisateur non trouvé")
    return users[user_id]"#,
        explanation: "Chaque décorateur FastAPI associe un verbe HTTP et un chemin à une fonction. Utilisez HTTPException(404, \"Message\") pour les erreurs.",
    },
    HelpRecord {
        identifier: "7.2.2",
        hint: "Utilisez UserCreate pour les entrées (POST, PUT) et UserResponse pour les sorties. Field(..., min_length=2) pour la validation.",
        solution: r#"# Modèles Pydantic
class UserCreate(BaseModel):
    name: str = Field(..., min_length=2)
    email: EmailStr

    @validator('name')
    def name_non_vide(cls, v):
        if not v.strip():
            raise ValueError('Le nom ne peut pas être vide')
        return v

class UserResponse(BaseModel):
    id: int
    name: str
    email: EmailStr

# Dans les décorateurs :
# @app.post("/users", response_model=UserResponse, status_code=201)

# Installation : pip install email-validator (pour EmailStr)"#,
        explanation: "Pydantic valide automatiquement les entrées. response_model=UserResponse filtre les champs exposés en sortie. @validator('name') permet une validation personnalisée.",
    },
    HelpRecord {
        identifier: "7.3.1",
        hint: "Implémentez verify_password(), create_access_token(), verify_token() et get_current_user(). Installation : pip install python-jose[cryptography] passlib[bcrypt]",
        solution: r#"# Fonctions à implémenter
def verify_password(plain, hashed):   # Vérifier mot de passe hashé
    ...

def create_access_token(data):        # Créer JWT avec expiration
    ...

def verify_token(token):              # Décoder et vérifier JWT
    ...

def get_current_user(token):          # Middleware authentification
    ...

# Endpoints
# POST /login     - Authentification
# GET  /protected - Route protégée"#,
        explanation: "Un JWT signé transporte l'identité de l'utilisateur avec une expiration. Chaque route protégée vérifie le token avant de répondre.",
    },
    HelpRecord {
        identifier: "7.3.2",
        hint: "Ajoutez CORSMiddleware et GZipMiddleware. En production, spécifiez des domaines précis au lieu de \"*\".",
        solution: r#"# Middleware de sécurité
@app.middleware("http")
async def security_headers(request: Request, call_next):
    response = await call_next(request)
    response.headers["X-Content-Type-Options"] = "nosniff"
    response.headers["X-Frame-Options"] = "DENY"
    response.headers["X-XSS-Protection"] = "1; mode=block"
    return response

# Rate limiting
from collections import defaultdict
request_counts = defaultdict(list)

@app.middleware("http")
async def rate_limit(request: Request, call_next):
    client_ip = request.client.host
    current_time = time.time()

    # Nettoyer les anciens timestamps
    request_counts[client_ip] = [
        t for t in request_counts[client_ip]
        if current_time - t < 60
    ]

    # Vérifier limite (100 req/min)
    if len(request_counts[client_ip]) >= 100:
        raise HTTPException(429, "Trop de requêtes")

    request_counts[client_ip].append(current_time)
    return await call_next(request)

# Test CORS
# curl -H "Origin: http://example.com" -X OPTIONS http://localhost:8000/users
# Test headers sécurité
# curl -I http://localhost:8000/"#,
        explanation: "CORS permet les requêtes cross-domain, GZip compresse les réponses, un middleware personnalisé traite chaque requête avant/après. Inspectez les headers HTTP pour valider.",
    },
    HelpRecord {
        identifier: "7.4.1",
        hint: "Utilisez TestClient(app) pour tester les endpoints. Données invalides → 422. Testez avec et sans token.",
        solution: r#"# Tests avec TestClient
from fastapi.testclient import TestClient
client = TestClient(app)

def test_lister_users():
    response = client.get("/users")
    assert response.status_code == 200

def test_validation():
    response = client.post("/users", json={"name": ""})
    assert response.status_code == 422

def test_sans_token():
    response = client.get("/protected")
    assert response.status_code == 401

# Exécution : pytest -v
# Couverture : pytest --cov=main"#,
        explanation: "TestClient simule les requêtes HTTP sans démarrer de serveur. Testez les cas d'erreur : 404, 401, 422.",
    },
    HelpRecord {
        identifier: "7.4.2",
        hint: "Configurez le logging structuré, les variables d'environnement pour les secrets et un endpoint /health.",
        solution: r#"# Configuration production
# 1. Logging structuré
import logging
logging.basicConfig(level=logging.INFO)

# 2. Variables d'environnement pour les secrets
SECRET_KEY = os.environ["SECRET_KEY"]

# 3. Health check
@app.get("/health")
def health():
    return {"status": "ok"}

# 4. Lancement avec workers
# uvicorn main:app --host 0.0.0.0 --port 8000 --workers 4"#,
        explanation: "En production : logging structuré, secrets en variables d'environnement, endpoint /health pour la supervision, gestionnaire d'erreurs global. Docker : Dockerfile + docker-compose.",
    },
];
