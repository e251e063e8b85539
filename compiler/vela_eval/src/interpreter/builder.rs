//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use vela_build::BuildOptions;
use vela_runtime::Environment;

use super::Interpreter;
use crate::{intrinsics, EvalConfig, InterruptHandle, ResultCache};

/// Builder for creating Interpreter instances.
///
/// Everything is optional: by default the interpreter gets a fresh root
/// environment, the default [`EvalConfig`] and its own interrupt flag.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    config: EvalConfig,
    interrupt: Option<InterruptHandle>,
    build_options: BuildOptions,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate in a host-supplied environment.
    ///
    /// Bindings made before the interpreter is built (host functions,
    /// observation fields) shadow intrinsics of the same name.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an interrupt flag with the host.
    #[must_use]
    pub fn interrupt(mut self, interrupt: InterruptHandle) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Options used by [`Interpreter::run`] when building trees.
    #[must_use]
    pub fn build_options(mut self, options: BuildOptions) -> Self {
        self.build_options = options;
        self
    }

    pub fn build(self) -> Interpreter {
        let env = self.env.unwrap_or_default();
        if self.config.install_intrinsics {
            intrinsics::install(&env, &self.config);
        }
        Interpreter {
            env,
            config: self.config,
            interrupt: self.interrupt.unwrap_or_default(),
            build_options: self.build_options,
            cache: ResultCache::new(),
            call_depth: 0,
        }
    }
}
