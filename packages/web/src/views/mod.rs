mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod contact;
pub use contact::Contact;

mod upload;
pub use upload::Upload;

mod profile;
pub use profile::Profile;

mod bookmarks;
pub use bookmarks::Bookmarks;

pub mod admin;
pub use admin::{
    AdminDashboard, ApprovedResources, ContactMessages, PendingResources, RejectedResources,
    UserManagement,
};
