use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use marketplace_auth_backend::config::{AuthSettings, DatabaseConfig, ServerConfig};
use marketplace_auth_backend::db::Database;
use marketplace_auth_backend::repositories::users::{InMemoryUserRepository, UserRepository, UserStore};
use marketplace_auth_backend::routes::configure_all_routes;
use marketplace_auth_backend::services::auth::AuthService;

#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_source = load_env_file();
    init_logging();

    info!("🚀 마켓플레이스 인증 서비스 시작중... ({})", env_source);

    let settings = AuthSettings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    if settings.require_verified_email {
        info!("이메일 인증 전 로그인 차단 활성화");
    }

    // 데이터 스토어 초기화
    let store = initialize_user_store().await?;

    let auth_service = web::Data::new(AuthService::from_settings(store, &settings));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(auth_service).await
}

async fn start_http_server(auth_service: web::Data<AuthService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 생성 실패");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(auth_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// `PROFILE`에 맞는 `.env` 파일을 로드하고, 로드 결과를 설명하는 문자열을 돌려줍니다.
///
/// 로거 초기화 전에 호출되므로 여기서는 로그를 남기지 않습니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            // 기본 .env 파일 로드
            return match dotenv() {
                Ok(_) => "기본 .env 파일 로드".to_string(),
                Err(_) => ".env 파일 없음, 환경 변수만 사용".to_string(),
            };
        }
    };

    match dotenv::from_filename(filename) {
        Ok(_) => format!("{} 파일 로드 됨", filename),
        Err(e) => format!("{} 파일 로드 실패: {}", filename, e),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

async fn initialize_user_store() -> std::io::Result<Arc<dyn UserStore>> {
    if DatabaseConfig::use_in_memory_store() {
        warn!("⚠️ 메모리 저장소 사용 중 (재시작 시 데이터가 사라집니다)");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    }

    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&DatabaseConfig::from_env())
        .await
        .map_err(|e| {
            error!("데이터베이스 연결 실패: {}", e);
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
        })?;

    info!("✅ MongoDB 연결 성공: {}", database.database_name());

    let repository = UserRepository::new(Arc::new(database));
    repository
        .create_indexes()
        .await
        .map_err(|e| {
            error!("인덱스 생성 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    Ok(Arc::new(repository))
}

fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

fn load_rate_limit_config() -> RateLimitConfig {
    let config = RateLimitConfig {
        per_second: ServerConfig::rate_limit_per_second(),
        burst_size: ServerConfig::rate_limit_burst_size(),
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
