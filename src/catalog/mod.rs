//! 정적 참조 테이블 모음. 런타임에 변경되지 않는 읽기 전용 데이터다.

pub mod deployment;
pub mod hardware;
pub mod model_energy;
pub mod region;
pub mod server;

pub use deployment::{find_deployment, DeploymentData, RateClass};
pub use hardware::{find_hardware, HardwareData};
pub use model_energy::{find_model, ModelEnergyData};
pub use region::{find_region, RegionData};
pub use server::{find_server, RackInfraCosts, ServerData, RACK_INFRA};
