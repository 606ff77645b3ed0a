//! Language-agnostic rendering capability.

use clientgen_ir::ServiceModule;

/// Renders one controller's services into a client module.
///
/// Implement this trait to target a new client language. Rendering is pure:
/// the same module must always produce the same text.
pub trait ServiceRenderer {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated modules, without the dot (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render the full contents of a module file.
    fn render(&self, module: &ServiceModule) -> String;
}

impl<T: ServiceRenderer + ?Sized> ServiceRenderer for &T {
    fn language(&self) -> &'static str {
        (**self).language()
    }

    fn file_extension(&self) -> &'static str {
        (**self).file_extension()
    }

    fn render(&self, module: &ServiceModule) -> String {
        (**self).render(module)
    }
}
