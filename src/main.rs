//! 고객 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소, 파이프라인, 토큰 서비스를 초기화합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use customer_service::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use customer_service::repositories::{CustomerRepository, InMemoryCustomerRepository};
use customer_service::routes::configure_all_routes;
use customer_service::services::auth::TokenService;
use customer_service::services::build_mediator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화 (.env의 RUST_LOG가 반영되도록 순서 유지)
    let env_file_status = load_env_file();
    init_logging();
    match env_file_status {
        Ok(message) => info!("{}", message),
        Err(message) => error!("{}", message),
    }

    info!("🚀 고객 관리 서비스 시작중...");

    let repository: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
    let mediator = web::Data::new(build_mediator(repository));
    let token_service = web::Data::new(TokenService::from_config());

    info!("✅ 파이프라인 및 서비스 초기화 완료");

    start_http_server(mediator, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    mediator: web::Data<customer_service::core::Mediator>,
    token_service: web::Data<TokenService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Customers API: http://{}/api/v1/customers", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let environment = Environment::current();
    let allowed_origins = CorsConfig::allowed_origins();
    info!("🌍 실행 환경: {:?}", environment);

    HttpServer::new(move || {
        let cors = configure_cors(&environment, &allowed_origins);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(mediator.clone())
            .app_data(token_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 반환하고, 호출자가 로거 초기화 후 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            return Ok(format!("[{}] 기본 .env 파일 로드", profile));
        }
    };

    dotenv::from_filename(filename)
        .map(|_| format!("[{}] {} 파일 로드 됨", profile, filename))
        .map_err(|e| format!("[{}] {} 파일 로드 실패: {}", profile, filename, e))
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=customer_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 개발 환경에서는 모든 Origin을 허용하고,
/// 그 외 환경에서는 `ALLOWED_ORIGINS`에 지정된 Origin만 허용합니다.
fn configure_cors(environment: &Environment, allowed_origins: &[String]) -> Cors {
    let cors = if environment.is_development() {
        Cors::default().allow_any_origin()
    } else {
        if allowed_origins.is_empty() {
            error!("ALLOWED_ORIGINS가 비어 있습니다. 교차 출처 요청이 모두 거부됩니다");
        }
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
