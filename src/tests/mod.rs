//! Test suite for the LaunchDarkly blocks
//!
//! Tests are grouped by layer: core types and the parameter filter, endpoint
//! descriptors, the request helper, the registry and catalogue, configuration,
//! and end-to-end invocations through the runtime.


#[cfg(test)]
mod core_tests;
#[cfg(test)]
mod parameter_tests;
#[cfg(test)]
mod endpoint_tests;
