pub mod math;

use crate::native::NativeModule;

static MODULES: &[&dyn NativeModule] = &[&math::Math];

/// A bundled module, looked up by the name used in [`Config::modules`].
///
/// [`Config::modules`]: crate::Config::modules
pub fn module_by_name(name: &str) -> Option<&'static dyn NativeModule> {
    MODULES.iter().copied().find(|m| m.name() == name)
}

pub fn module_names() -> impl Iterator<Item = &'static str> {
    MODULES.iter().map(|m| m.name())
}
