pub use super::login_data::Entity as LoginData;
