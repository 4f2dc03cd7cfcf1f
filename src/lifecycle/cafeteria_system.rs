use crate::class_actor::ClassError;
use crate::clients::{ClassClient, MenuClient, OrderClient, StudentClient};
use crate::lifecycle::Config;
use crate::lookup::Directory;
use crate::menu_actor::MenuError;
use crate::model::{Session, StaffOnly};
use crate::order_actor::OrderError;
use crate::reports::{Dashboard, DashboardScope};
use crate::student_actor::StudentError;
use chrono::{DateTime, TimeZone};
use docstore::CollectionHandle;
use thiserror::Error;
use tracing::{error, info};

/// Errors surfaced by system-level operations that span collections.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Class(#[from] ClassError),
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Forbidden(#[from] StaffOnly),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

/// The runtime orchestrator for the cafeteria.
///
/// `CafeteriaSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the four collection actors
/// - **Dependency Wiring**: The order collection resolves rooms through the class client
/// - **Cross-collection reads**: Building the [`Directory`] and dashboards
///
/// # Example
///
/// ```rust
/// use cafeteria::lifecycle::{CafeteriaSystem, Config};
/// use cafeteria::model::Session;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CafeteriaSystem::new(&Config::default());
///     let dashboard = system
///         .dashboard(&Session::staff(), None, &chrono::Utc::now())
///         .await?;
///     assert_eq!(dashboard.delivered_orders, 0);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CafeteriaSystem {
    pub order_client: OrderClient,
    pub menu_client: MenuClient,
    pub class_client: ClassClient,
    pub student_client: StudentClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeteriaSystem {
    /// Creates the four collections and starts their actors. Must be called inside a
    /// Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors (no dependencies)
        let (menu_actor, menu_client) = crate::menu_actor::new(capacity);
        let (class_actor, class_client) = crate::class_actor::new(capacity);
        let (student_actor, student_client) = crate::student_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        let class_client = ClassClient::new(class_client);

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let class_handle = tokio::spawn(class_actor.run(()));
        let student_handle = tokio::spawn(student_actor.run(()));
        // Orders resolve the room of the named class on create
        let order_handle = tokio::spawn(order_actor.run(class_client.clone()));

        info!(capacity, "Cafeteria system started");

        Self {
            order_client: OrderClient::new(order_client),
            menu_client: MenuClient::new(menu_client),
            class_client,
            student_client: StudentClient::new(student_client),
            handles: vec![menu_handle, class_handle, student_handle, order_handle],
        }
    }

    /// Current students and menu, for resolving order references.
    pub async fn directory(&self) -> Result<Directory, SystemError> {
        let students = self.student_client.list().await?;
        let menu = self.menu_client.list().await?;
        Ok(Directory::new(students, menu))
    }

    /// Dashboard over the current orders.
    ///
    /// Staff get `scope`, defaulting to all students. A student session always gets
    /// its own figures, whatever `scope` says.
    pub async fn dashboard<Tz: TimeZone>(
        &self,
        session: &Session,
        scope: Option<DashboardScope>,
        now: &DateTime<Tz>,
    ) -> Result<Dashboard, SystemError> {
        let scope = match (session.is_staff(), scope) {
            (true, Some(scope)) => scope,
            _ => session.default_scope(),
        };
        let orders = self.order_client.list().await?;
        let directory = self.directory().await?;
        Ok(Dashboard::build(&orders, &directory, &scope, now))
    }

    /// Empty every collection. Staff only.
    pub async fn reset(&self, session: &Session) -> Result<(), SystemError> {
        session.require_staff()?;
        for order in self.order_client.list().await? {
            self.order_client.delete_order(session, order.id).await?;
        }
        for class in self.class_client.list().await? {
            self.class_client.delete_class(session, class.id).await?;
        }
        for student in self.student_client.list().await? {
            self.student_client.delete_student(session, student.id).await?;
        }
        for item in self.menu_client.list().await? {
            self.menu_client.delete_item(session, item.id).await?;
        }
        info!("All collections cleared");
        Ok(())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the request channels; each actor finishes its
    /// queue and exits. The class actor also waits for the order actor, which holds a
    /// class client as its context.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.menu_client);
        drop(self.class_client);
        drop(self.student_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(format!("{e:?}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
