pub(crate) mod error_stack;
pub(crate) mod grid;
pub(crate) mod histogram;
pub(crate) mod rolling_stack;
pub(crate) mod scatter;
pub(crate) mod sorted_wave;
pub(crate) mod stack;
pub(crate) mod status_stack;
pub(crate) mod sweep;
pub(crate) mod visualizer;
pub(crate) mod wave;
pub(crate) mod window;
