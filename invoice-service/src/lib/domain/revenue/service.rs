use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::revenue::models::Revenue;
use crate::revenue::errors::RevenueError;
use crate::revenue::ports::RevenueRepository;
use crate::revenue::ports::RevenueServicePort;

pub struct RevenueService<RR>
where
    RR: RevenueRepository,
{
    repository: Arc<RR>,
}

impl<RR> RevenueService<RR>
where
    RR: RevenueRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> RevenueServicePort for RevenueService<RR>
where
    RR: RevenueRepository,
{
    async fn list_revenues(&self) -> Result<Vec<Revenue>, RevenueError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestRevenueRepository {}

        #[async_trait]
        impl RevenueRepository for TestRevenueRepository {
            async fn list_all(&self) -> Result<Vec<Revenue>, RevenueError>;
        }
    }

    #[tokio::test]
    async fn test_list_revenues_keeps_repository_order() {
        let mut repository = MockTestRevenueRepository::new();
        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Revenue {
                    month: "Jan".to_string(),
                    revenue: 2000,
                },
                Revenue {
                    month: "Feb".to_string(),
                    revenue: 1800,
                },
            ])
        });

        let service = RevenueService::new(Arc::new(repository));
        let months: Vec<String> = service
            .list_revenues()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.month)
            .collect();

        assert_eq!(months, vec!["Jan", "Feb"]);
    }

    #[tokio::test]
    async fn test_list_revenues_propagates_database_error() {
        let mut repository = MockTestRevenueRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(|| Err(RevenueError::DatabaseError("connection reset".to_string())));

        let service = RevenueService::new(Arc::new(repository));

        assert!(matches!(
            service.list_revenues().await,
            Err(RevenueError::DatabaseError(_))
        ));
    }
}
