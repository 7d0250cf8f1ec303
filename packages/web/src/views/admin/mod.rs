mod dashboard;
pub use dashboard::AdminDashboard;

mod pending;
pub use pending::PendingResources;

mod approved;
pub use approved::ApprovedResources;

mod rejected;
pub use rejected::RejectedResources;

mod users;
pub use users::UserManagement;

mod edit_user;
pub(crate) use edit_user::EditUserDialog;

mod messages;
pub use messages::ContactMessages;
