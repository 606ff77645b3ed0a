use std::collections::BTreeSet;

use clientgen_core::File;
use clientgen_ir::{ServiceDeclaration, ServiceModule};
use clientgen_model::{ControllerRef, ProjectDecl, SemanticModel, controllers};
use tracing::{debug, info, info_span, warn};

use super::{GenerationReport, GeneratorConfig, SkippedMethod, WrittenFile};
use crate::{
    ControllerFailure, ExtractError, ServiceRenderer,
    extract::{map_method, resolve_methods},
    generation::ModulePath,
};

/// Receives per-controller events while the driver runs.
pub trait Progress {
    /// Called before a controller is processed, with its display path
    /// relative to the services root.
    fn controller_started(&mut self, controller: &str, path: &str);

    /// Called when a controller is abandoned.
    fn controller_failed(&mut self, failure: &ControllerFailure);
}

/// Progress sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn controller_started(&mut self, _controller: &str, _path: &str) {}

    fn controller_failed(&mut self, _failure: &ControllerFailure) {}
}

/// Generates one client module per controller.
///
/// # Example
///
/// ```ignore
/// let solution = Solution::open("solution.json")?;
/// let frontends = solution.frontends(&config.project_prefix)?;
/// let report = Driver::new(&solution, &TypeScriptRenderer::new(), &config)
///     .run(&frontends, &mut NoProgress);
/// ```
pub struct Driver<'a, M: ?Sized, R: ?Sized> {
    model: &'a M,
    renderer: &'a R,
    config: &'a GeneratorConfig,
}

/// What a successfully processed controller yields before writing.
struct Rendered {
    file: File,
    services: usize,
}

impl<'a, M, R> Driver<'a, M, R>
where
    M: SemanticModel + ?Sized,
    R: ServiceRenderer + ?Sized,
{
    pub fn new(model: &'a M, renderer: &'a R, config: &'a GeneratorConfig) -> Self {
        Self {
            model,
            renderer,
            config,
        }
    }

    /// Process every controller of `frontends` in enumeration order.
    ///
    /// Never fails as a whole: a controller that cannot be generated is
    /// recorded in the report and no file is written for it.
    pub fn run(&self, frontends: &[&'a ProjectDecl], progress: &mut dyn Progress) -> GenerationReport {
        let multi_frontend = frontends.len() > 1;
        let mut report = GenerationReport::default();
        let _run = info_span!("generate", language = self.renderer.language()).entered();

        for controller in controllers(frontends) {
            let path = ModulePath::derive(
                &controller.project.assembly_name,
                &controller.document.folders,
                controller.base_name(),
                multi_frontend,
            );
            let display = path.display(self.renderer.file_extension());
            progress.controller_started(controller.name(), &display);

            let _span = info_span!("controller", name = controller.name()).entered();
            match self
                .render_controller(controller, &path, &mut report.skipped_methods)
                .and_then(|rendered| self.write(controller, rendered))
            {
                Ok(written) => {
                    info!(path = %written.path.display(), result = ?written.result, "wrote module");
                    report.written.push(written);
                }
                Err(failure) => {
                    debug!(error = %failure.error, "controller failed: {failure}");
                    progress.controller_failed(&failure);
                    report.failures.push(failure);
                }
            }
        }

        report
    }

    fn render_controller(
        &self,
        controller: ControllerRef<'_>,
        path: &ModulePath,
        skipped: &mut Vec<SkippedMethod>,
    ) -> Result<Rendered, ControllerFailure> {
        let name = controller.name();
        let methods = resolve_methods(self.model, controller.class)
            .map_err(|e| ControllerFailure::new(name, e))?;

        let mut services: Vec<ServiceDeclaration> = Vec::with_capacity(methods.len());
        let mut redirects = Vec::new();
        for method in methods {
            match map_method(method)
                .map_err(|e| ControllerFailure::new(name, e).in_method(&method.name))?
            {
                Some(service) => services.push(service),
                None => {
                    debug!(method = %method.name, "skipping redirect method");
                    redirects.push(SkippedMethod {
                        controller: name.to_string(),
                        method: method.name.clone(),
                    });
                }
            }
        }
        // Redirects are reported only once every method has mapped.
        skipped.extend(redirects);

        let mut seen = BTreeSet::new();
        for service in &services {
            if !seen.insert(service.name.as_str()) {
                warn!(
                    method = %service.name,
                    "overloaded action renders to duplicate functions in {name}"
                );
            }
        }

        let module = ServiceModule::new(
            controller.project.assembly_name.clone(),
            path.folder_count(),
            services,
        );
        let count = module.services.len();
        let target = self
            .config
            .module_file(&path.relative_path(self.renderer.file_extension()));

        Ok(Rendered {
            file: File::new(target, self.renderer.render(&module)),
            services: count,
        })
    }

    fn write(
        &self,
        controller: ControllerRef<'_>,
        rendered: Rendered,
    ) -> Result<WrittenFile, ControllerFailure> {
        let path = rendered.file.path().to_path_buf();
        let result = rendered.file.write().map_err(|source| {
            ControllerFailure::new(
                controller.name(),
                ExtractError::Io {
                    path: path.clone(),
                    source,
                },
            )
        })?;

        Ok(WrittenFile {
            controller: controller.name().to_string(),
            path,
            result,
            services: rendered.services,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use clientgen_core::{TypeRef, WriteResult};
    use clientgen_model::{ClassDecl, Solution};

    use super::*;
    use crate::testing::{ActionBuilder, ListingRenderer, TempOutput, controller, document, project};

    #[derive(Default)]
    struct Recorder {
        started: Vec<String>,
        failed: Vec<String>,
    }

    impl Progress for Recorder {
        fn controller_started(&mut self, controller: &str, path: &str) {
            self.started.push(format!("{controller} -> {path}"));
        }

        fn controller_failed(&mut self, failure: &ControllerFailure) {
            self.failed.push(failure.to_string());
        }
    }

    fn shop() -> Solution {
        let orders = controller(
            "OrdersController",
            vec![
                ActionBuilder::new("GetOrder", "Get", "orders/{id}")
                    .returns(TypeRef::generic("Task", [TypeRef::named("Order")]))
                    .param("id", TypeRef::named("int"))
                    .build(),
                ActionBuilder::new("Checkout", "Post", "orders/checkout")
                    .returns(TypeRef::named("RedirectResult"))
                    .build(),
            ],
        );
        let users = controller(
            "UsersController",
            vec![ActionBuilder::new("ListUsers", "Get", "users").undocumented().build()],
        );
        let health = controller(
            "HealthController",
            vec![ActionBuilder::new("Ping", "Get", "health").build()],
        );
        Solution::new(vec![project(
            "Acme.Shop.Web",
            vec![
                document(&["Controllers"], vec![orders]),
                document(&["Controllers", "Account"], vec![users]),
                document(&["Controllers"], vec![health]),
            ],
        )])
    }

    /// In-memory sink for formatted tracing output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_failures_are_not_logged_at_warn() {
        let solution = shop();
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();
        let mut progress = Recorder::default();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut progress)
        });

        assert_eq!(report.failures.len(), 1);
        assert_eq!(progress.failed, ["UsersController.ListUsers"]);
        assert_eq!(captured.contents(), "");
    }

    #[test]
    fn test_overloaded_actions_are_warned() {
        let orders = controller(
            "OrdersController",
            vec![
                ActionBuilder::new("Find", "Get", "orders/{id}")
                    .param("id", TypeRef::named("int"))
                    .build(),
                ActionBuilder::new("Find", "Get", "orders/by-code/{code}")
                    .param("code", TypeRef::named("string"))
                    .build(),
            ],
        );
        let solution = Solution::new(vec![project(
            "Acme.Shop.Web",
            vec![document(&["Controllers"], vec![orders])],
        )]);
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut NoProgress)
        });

        // Both overloads are still emitted, in declaration order.
        assert!(report.is_success());
        assert_eq!(
            output.read("orders.txt").unwrap(),
            "# Acme.Shop.Web depth=0\nGET orders/{id} Find -> void\nGET orders/by-code/{code} Find -> void\n"
        );

        let logged = captured.contents();
        assert!(
            logged.contains("overloaded action renders to duplicate functions in OrdersController"),
            "{logged}"
        );
        assert!(logged.contains("method=Find"), "{logged}");
    }

    #[test]
    fn test_writes_are_logged_under_renderer_language() {
        let solution = shop();
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut NoProgress)
        });

        let logged = captured.contents();
        assert!(logged.contains("generate{language=listing}"), "{logged}");
        assert!(logged.contains("wrote module"), "{logged}");
    }

    #[test]
    fn test_failure_is_scoped_to_controller() {
        let solution = shop();
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();
        let mut progress = Recorder::default();

        let report = Driver::new(&solution, &ListingRenderer, &output.config)
            .run(&frontends, &mut progress);

        assert!(!report.is_success());
        assert_eq!(report.written.len(), 2);
        assert_eq!(progress.failed, ["UsersController.ListUsers"]);
        assert!(matches!(
            report.failures[0].error,
            ExtractError::MissingDocumentation
        ));
        assert!(output.exists("orders.txt"));
        assert!(output.exists("health.txt"));
        assert!(!output.exists("account/users.txt"));

        assert_eq!(
            progress.started,
            [
                "OrdersController -> orders.txt",
                "UsersController -> account/users.txt",
                "HealthController -> health.txt",
            ]
        );
    }

    #[test]
    fn test_redirects_are_skipped() {
        let solution = shop();
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();

        let report =
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut NoProgress);

        assert_eq!(
            report.skipped_methods,
            [SkippedMethod {
                controller: "OrdersController".to_string(),
                method: "Checkout".to_string(),
            }]
        );
        assert_eq!(
            output.read("orders.txt").unwrap(),
            "# Acme.Shop.Web depth=0\nGET orders/{id} GetOrder -> Order\n"
        );
    }

    #[test]
    fn test_rerun_is_unchanged() {
        let solution = shop();
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();
        let driver = Driver::new(&solution, &ListingRenderer, &output.config);

        let first = driver.run(&frontends, &mut NoProgress);
        let before = output.read("orders.txt").unwrap();
        let second = driver.run(&frontends, &mut NoProgress);

        assert_eq!(first.changed().count(), 2);
        assert_eq!(second.changed().count(), 0);
        assert!(
            second
                .written
                .iter()
                .all(|f| f.result == WriteResult::Unchanged)
        );
        assert_eq!(output.read("orders.txt").unwrap(), before);
    }

    #[test]
    fn test_multi_frontend_prefixes_project_segment() {
        let admin = controller(
            "OrdersController",
            vec![ActionBuilder::new("Approve", "Put", "orders/{id}/approve")
                .param("id", TypeRef::named("int"))
                .build()],
        );
        let shop = controller(
            "OrdersController",
            vec![ActionBuilder::new("Place", "Post", "orders")
                .body("order", TypeRef::named("Order"))
                .build()],
        );
        let solution = Solution::new(vec![
            project(
                "Acme.Admin.Web",
                vec![document(&["Controllers", "Admin", "Orders"], vec![admin])],
            ),
            project("Acme.Shop.Web", vec![document(&["Controllers"], vec![shop])]),
        ]);
        let output = TempOutput::new("Acme.").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();

        let report =
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut NoProgress);

        assert!(report.is_success());
        assert_eq!(
            output.read("admin/admin/orders/orders.txt").unwrap(),
            "# Acme.Admin.Web depth=3\nPUT orders/{id}/approve Approve -> void\n"
        );
        assert_eq!(
            output.read("shop/orders.txt").unwrap(),
            "# Acme.Shop.Web depth=1\nPOST orders Place -> void\n"
        );
    }

    #[test]
    fn test_base_controller_merge_and_unresolvable_base() {
        let base = ClassDecl {
            is_abstract: true,
            ..controller(
                "CrudController",
                vec![ActionBuilder::new("List", "Get", "items").build()],
            )
        };
        let derived = ClassDecl {
            base_type: Some(TypeRef::named("CrudController")),
            ..controller(
                "ItemsController",
                vec![ActionBuilder::new("Get", "Get", "items/{id}").param("id", TypeRef::named("int")).build()],
            )
        };
        let orphan = ClassDecl {
            base_type: Some(TypeRef::named("LegacyController")),
            ..controller("ArchiveController", Vec::new())
        };
        let solution = Solution::new(vec![project(
            "Acme.Web",
            vec![document(&["Controllers"], vec![base, derived, orphan])],
        )]);
        let output = TempOutput::new("Acme").unwrap();
        let frontends = solution.frontends("Acme").unwrap();

        let report =
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut NoProgress);

        assert_eq!(
            output.read("items.txt").unwrap(),
            "# Acme.Web depth=0\nGET items/{id} Get -> void\nGET items List -> void\n"
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].to_string(), "ArchiveController");
        assert!(matches!(
            &report.failures[0].error,
            ExtractError::UnresolvableBaseController { base } if base == "LegacyController"
        ));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let solution = shop();
        let output = TempOutput::new("Acme.").unwrap();
        // A regular file where the services directory should be.
        std::fs::create_dir_all(output.root().join("app")).unwrap();
        std::fs::write(output.root().join("app/services"), "not a directory").unwrap();
        let frontends = solution.frontends("Acme.").unwrap();

        let report =
            Driver::new(&solution, &ListingRenderer, &output.config).run(&frontends, &mut NoProgress);

        assert!(report.written.is_empty());
        assert_eq!(report.failures.len(), 3);
        assert!(matches!(report.failures[0].error, ExtractError::Io { .. }));
    }
}
