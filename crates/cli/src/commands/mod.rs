pub mod analyze;
pub mod init;
pub mod scaffold;
pub mod stub;

pub use analyze::analyze_command;
pub use init::init_command;
pub use scaffold::scaffold_command;
pub use stub::stub_command;
