//! # MongoDB 연결 관리
//!
//! 시작 시점에 한 번 생성되어 [`UserRepository`](crate::repositories::users::UserRepository)에
//! `Arc`로 주입되는 데이터베이스 핸들입니다. 전역 상태로 보관하지 않습니다.
//!
//! ```rust,ignore
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! let repo = UserRepository::new(Arc::new(database));
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 클라이언트 생성 후 ping으로 연결을 확인합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 모니터링용 애플리케이션 이름
        client_options.app_name = Some("marketplace_auth".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
