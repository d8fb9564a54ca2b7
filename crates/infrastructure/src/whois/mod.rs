mod provider;

pub use provider::JsonWhoisProvider;
