#![allow(dead_code)]

pub mod db;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenLifetimes;
use chrono::NaiveDate;
use invoice_service::domain::customer::errors::CustomerError;
use invoice_service::domain::customer::models::CustomerId;
use invoice_service::domain::customer::models::CustomerRef;
use invoice_service::domain::customer::models::CustomerSummary;
use invoice_service::domain::customer::ports::CustomerRepository;
use invoice_service::domain::customer::service::CustomerService;
use invoice_service::domain::invoice::errors::InvoiceError;
use invoice_service::domain::invoice::models::Amount;
use invoice_service::domain::invoice::models::Invoice;
use invoice_service::domain::invoice::models::InvoiceCommand;
use invoice_service::domain::invoice::models::InvoiceCustomer;
use invoice_service::domain::invoice::models::InvoiceId;
use invoice_service::domain::invoice::models::InvoiceStatus;
use invoice_service::domain::invoice::models::InvoiceWithCustomer;
use invoice_service::domain::invoice::models::StatusCount;
use invoice_service::domain::invoice::ports::InvoiceRepository;
use invoice_service::domain::invoice::service::InvoiceService;
use invoice_service::domain::pagination::Page;
use invoice_service::domain::revenue::errors::RevenueError;
use invoice_service::domain::revenue::models::Revenue;
use invoice_service::domain::revenue::ports::RevenueRepository;
use invoice_service::domain::revenue::service::RevenueService;
use invoice_service::domain::user::errors::UserError;
use invoice_service::domain::user::models::EmailAddress;
use invoice_service::domain::user::models::User;
use invoice_service::domain::user::models::UserId;
use invoice_service::domain::user::ports::UserRepository;
use invoice_service::domain::user::service::UserService;
use invoice_service::inbound::http::router::create_router;
use invoice_service::inbound::http::router::AppState;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::seeded());

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, TokenLifetimes::default()));

        let state = AppState {
            user_service: Arc::new(UserService::new(
                Arc::clone(&store),
                Arc::clone(&authenticator),
            )),
            invoice_service: Arc::new(InvoiceService::new(Arc::clone(&store))),
            customer_service: Arc::new(CustomerService::new(Arc::clone(&store))),
            revenue_service: Arc::new(RevenueService::new(Arc::clone(&store))),
            authenticator,
        };
        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            store,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response body
    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a fresh user and return the login body
    pub async fn signed_in_user(&self) -> Value {
        self.register("Nicola", "nicola@example.com", "pass_word!")
            .await;
        self.login("nicola@example.com", "pass_word!")
            .await
            .json()
            .await
            .expect("Failed to parse response")
    }

    /// Access token of a freshly registered user
    pub async fn access_token(&self) -> String {
        self.signed_in_user().await["accessToken"]
            .as_str()
            .expect("accessToken missing")
            .to_string()
    }
}

/// Shared in-memory backing store implementing every repository port.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<UserId, User>>,
    customers: Mutex<Vec<InMemoryCustomer>>,
    invoices: Mutex<Vec<Invoice>>,
    revenues: Mutex<Vec<Revenue>>,
}

#[derive(Debug, Clone)]
pub struct InMemoryCustomer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        let store = Self::default();

        let evil = InMemoryCustomer {
            id: CustomerId::new(),
            name: "Evil Rabbit".to_string(),
            email: "evil@rabbit.com".to_string(),
            image_url: "/customers/evil-rabbit.png".to_string(),
        };
        let delba = InMemoryCustomer {
            id: CustomerId::new(),
            name: "Delba de Oliveira".to_string(),
            email: "delba@oliveira.com".to_string(),
            image_url: "/customers/delba-de-oliveira.png".to_string(),
        };

        let invoice = |customer: &InMemoryCustomer, amount, status, date: (i32, u32, u32)| Invoice {
            id: InvoiceId::new(),
            customer_id: customer.id,
            amount: Amount::new(amount).unwrap(),
            status,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        };

        *store.invoices.lock().unwrap() = vec![
            invoice(&evil, 15795, InvoiceStatus::Pending, (2022, 12, 6)),
            invoice(&delba, 20348, InvoiceStatus::Pending, (2022, 11, 14)),
            invoice(&evil, 666, InvoiceStatus::Paid, (2023, 6, 27)),
            invoice(&delba, 32545, InvoiceStatus::Paid, (2023, 6, 9)),
        ];
        *store.customers.lock().unwrap() = vec![evil, delba];
        *store.revenues.lock().unwrap() = ["Mar", "Jan", "Feb"]
            .iter()
            .zip([2200, 2000, 1800])
            .map(|(month, revenue)| Revenue {
                month: month.to_string(),
                revenue,
            })
            .collect();

        store
    }

    pub fn customer(&self, name: &str) -> InMemoryCustomer {
        self.customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .expect("unknown customer")
    }

    pub fn invoice_ids(&self) -> Vec<InvoiceId> {
        self.invoices.lock().unwrap().iter().map(|i| i.id).collect()
    }

    fn with_customer(&self, invoice: &Invoice) -> Option<InvoiceWithCustomer> {
        self.customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == invoice.customer_id)
            .map(|c| InvoiceWithCustomer {
                invoice: invoice.clone(),
                customer: InvoiceCustomer {
                    name: c.name.clone(),
                    email: c.email.clone(),
                    image_url: c.image_url.clone(),
                },
            })
    }

    fn matching(&self, query: &str) -> Vec<InvoiceWithCustomer> {
        let query = query.to_lowercase();
        let mut rows: Vec<InvoiceWithCustomer> = self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter_map(|invoice| self.with_customer(invoice))
            .filter(|row| {
                [
                    row.customer.name.to_lowercase(),
                    row.customer.email.to_lowercase(),
                    row.invoice.amount.value().to_string(),
                    row.invoice.date.to_string(),
                    row.invoice.status.to_string(),
                ]
                .iter()
                .any(|field| field.contains(&query))
            })
            .collect();
        rows.sort_by(|a, b| b.invoice.date.cmp(&a.invoice.date));
        rows
    }

    fn customer_exists(&self, id: &CustomerId) -> bool {
        self.customers.lock().unwrap().iter().any(|c| c.id == *id)
    }
}

fn paginate<T>(rows: Vec<T>, page: Page) -> Vec<T> {
    rows.into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn list_latest(&self, page: Page) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
        Ok(paginate(self.matching(""), page))
    }

    async fn search(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
        Ok(paginate(self.matching(query), page))
    }

    async fn count_matching(&self, query: &str) -> Result<i64, InvoiceError> {
        Ok(self.matching(query).len() as i64)
    }

    async fn count(&self) -> Result<i64, InvoiceError> {
        Ok(self.invoices.lock().unwrap().len() as i64)
    }

    async fn count_by_status(&self) -> Result<StatusCount, InvoiceError> {
        let invoices = self.invoices.lock().unwrap();
        let count = |status: InvoiceStatus| {
            invoices.iter().filter(|i| i.status == status).count() as i64
        };
        Ok(StatusCount {
            pending: count(InvoiceStatus::Pending),
            paid: count(InvoiceStatus::Paid),
        })
    }

    async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, InvoiceError> {
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == *id)
            .cloned())
    }

    async fn create(&self, invoice: Invoice) -> Result<InvoiceWithCustomer, InvoiceError> {
        let created = self
            .with_customer(&invoice)
            .ok_or_else(|| InvoiceError::CustomerNotFound(invoice.customer_id.to_string()))?;
        self.invoices.lock().unwrap().push(invoice);
        Ok(created)
    }

    async fn update(
        &self,
        id: &InvoiceId,
        command: InvoiceCommand,
    ) -> Result<Invoice, InvoiceError> {
        if !self.customer_exists(&command.customer_id) {
            return Err(InvoiceError::CustomerNotFound(
                command.customer_id.to_string(),
            ));
        }
        let mut invoices = self.invoices.lock().unwrap();
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == *id)
            .ok_or_else(|| InvoiceError::NotFound(id.to_string()))?;
        invoice.customer_id = command.customer_id;
        invoice.amount = command.amount;
        invoice.status = command.status;
        Ok(invoice.clone())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceError> {
        let mut invoices = self.invoices.lock().unwrap();
        let before = invoices.len();
        invoices.retain(|i| i.id != *id);
        if invoices.len() == before {
            return Err(InvoiceError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<CustomerRef>, CustomerError> {
        let mut customers: Vec<CustomerRef> = self
            .customers
            .lock()
            .unwrap()
            .iter()
            .map(|c| CustomerRef {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    async fn search_with_totals(&self, query: &str) -> Result<Vec<CustomerSummary>, CustomerError> {
        let query = query.to_lowercase();
        let customers = self.customers.lock().unwrap().clone();
        let invoices = self.invoices.lock().unwrap().clone();

        let mut summaries: Vec<CustomerSummary> = customers
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query) || c.email.to_lowercase().contains(&query)
            })
            .map(|c| {
                let owned: Vec<&Invoice> =
                    invoices.iter().filter(|i| i.customer_id == c.id).collect();
                let total = |status: InvoiceStatus| -> i64 {
                    owned
                        .iter()
                        .filter(|i| i.status == status)
                        .map(|i| i.amount.value())
                        .sum()
                };
                CustomerSummary {
                    id: c.id,
                    total_invoices: owned.len() as i64,
                    total_pending: total(InvoiceStatus::Pending),
                    total_paid: total(InvoiceStatus::Paid),
                    name: c.name,
                    email: c.email,
                    image_url: c.image_url,
                }
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    async fn count(&self) -> Result<i64, CustomerError> {
        Ok(self.customers.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl RevenueRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Revenue>, RevenueError> {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let mut revenues = self.revenues.lock().unwrap().clone();
        revenues.sort_by_key(|r| MONTHS.iter().position(|m| *m == r.month));
        Ok(revenues)
    }
}
