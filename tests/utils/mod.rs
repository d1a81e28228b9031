pub mod helpers;
pub mod mock_log_provider;
