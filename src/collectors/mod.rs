pub mod speedtest;

pub use speedtest::SpeedtestRunner;
