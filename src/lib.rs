pub mod cards;
pub mod config;
pub mod evaluation;
pub mod fault;
pub mod simulation;

#[cfg(feature = "cli")]
pub mod cli;

pub use fault::Fault;

/// Percentages in 0..=100.
pub type Probability = f32;

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .ok();
}
