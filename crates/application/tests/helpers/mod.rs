mod mock_repositories;

pub use mock_repositories::{
    MockBlocklistIndex, MockQueryLogRepository, MockWhoisCache, MockWhoisProvider,
};
