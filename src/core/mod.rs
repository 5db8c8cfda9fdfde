pub mod catalog;
pub mod chart;
pub mod session;
pub mod wear;

pub use crate::domain::model::{
    ChartBar, Distance, PartSpec, Rejection, ServiceRecord, TableRow, WearResult, WearStatus,
};
pub use crate::domain::ports::{ConfigProvider, PartLookup, Storage};
pub use crate::utils::error::Result;
