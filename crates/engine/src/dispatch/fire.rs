// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::sync::Arc;

use firegate_catalog::{CachedProcedure, TriggerCache};
use firegate_core::{
	CommandClass, CommandTag, FiringEvent, FiringPhase, ObjectId, error,
	interface::{
		catalog::ReturnContract,
		command::CommandIntrospection,
		procedure::{CallingConvention, ProcedureArgs, ProcedureOutput, ProcedureRegistry},
		transaction::CatalogTransaction,
	},
	internal,
	result::error::diagnostic::procedure::procedure_invocation_failed,
};
use tracing::{debug, instrument, warn};

use super::{
	context::{CommandContext, FiringState},
	outcome::FiringOutcome,
	scope::FiringScope,
};

/// Fires registered trigger procedures around the pipeline's command
/// execution. The cache is its only input dependency; procedure handles
/// come from the host registry resolved at invocation time.
pub struct DispatchEngine {
	cache: TriggerCache,
	procedures: Arc<dyn ProcedureRegistry>,
}

impl DispatchEngine {
	pub fn new(cache: TriggerCache, procedures: Arc<dyn ProcedureRegistry>) -> Self {
		Self {
			cache,
			procedures,
		}
	}

	/// Resolve the procedure lists for a classified command. One cache
	/// lookup; a command with zero registered triggers pays nothing else.
	#[instrument(name = "dispatch::init_context", level = "trace", skip(self, txn, introspection))]
	pub fn init_context(
		&self,
		txn: &mut dyn CatalogTransaction,
		tag: CommandTag,
		event: FiringEvent,
		introspection: Arc<dyn CommandIntrospection>,
	) -> crate::Result<CommandContext> {
		let class = CommandClass::Tag(tag.clone());
		let triggers = self.cache.lookup(txn, &class, event)?;
		Ok(CommandContext {
			tag: Some(tag),
			event,
			triggers,
			introspection,
			state: FiringState::NotStarted,
		})
	}

	/// Resolve only the wildcard bucket, for firings that carry no
	/// classified tag. Procedures see a null command tag.
	#[instrument(name = "dispatch::init_wildcard_context", level = "trace", skip(self, txn, introspection))]
	pub fn init_wildcard_context(
		&self,
		txn: &mut dyn CatalogTransaction,
		event: FiringEvent,
		introspection: Arc<dyn CommandIntrospection>,
	) -> crate::Result<CommandContext> {
		let triggers = self.cache.lookup(txn, &CommandClass::Any, event)?;
		Ok(CommandContext {
			tag: None,
			event,
			triggers,
			introspection,
			state: FiringState::NotStarted,
		})
	}

	/// BEFORE / INSTEAD OF pass. When any INSTEAD OF procedure is
	/// registered for the class, the phase is forced to INSTEAD OF:
	/// every one of them runs, none short-circuits another, and the real
	/// command is skipped. Otherwise BEFORE procedures run in firing
	/// order (specific class first, then wildcard) until one vetoes.
	pub fn fire_before_or_instead_of(&self, ctx: &mut CommandContext) -> crate::Result<FiringOutcome> {
		if ctx.state != FiringState::NotStarted {
			return Err(error!(internal!(
				"fire_before_or_instead_of called in state {:?}",
				ctx.state
			)));
		}
		ctx.state = FiringState::BeforeOrInsteadRunning;

		let scope = FiringScope::new();
		let mut pass = FiringPass::new(&scope, ctx.tag.as_ref(), Arc::clone(&ctx.introspection));

		if !ctx.triggers.instead_of().is_empty() {
			let count = ctx.triggers.instead_of().len();
			for cached in ctx.triggers.instead_of() {
				self.invoke(&mut pass, cached, FiringPhase::InsteadOf)?;
			}
			ctx.state = FiringState::Substituted;
			debug!(count, "command substituted by INSTEAD OF triggers");
			return Ok(FiringOutcome::Substituted {
				count,
			});
		}

		let before =
			ctx.triggers.class_procs.before.iter().chain(ctx.triggers.any_procs.before.iter());
		for cached in before {
			let output = self.invoke(&mut pass, cached, FiringPhase::Before)?;
			if output.vetoed() {
				warn!(trigger = %cached.name, "command cancelled by BEFORE trigger");
				let trigger = cached.name.clone();
				ctx.state = FiringState::Cancelled;
				return Ok(FiringOutcome::Cancelled {
					trigger,
				});
			}
		}

		ctx.state = FiringState::Proceed;
		Ok(FiringOutcome::Proceed)
	}

	/// AFTER pass, once the real command completed. Runs every AFTER
	/// procedure in firing order; AFTER never vetoes, and a procedure
	/// failure aborts the remainder of the pass and propagates as the
	/// command's own failure.
	pub fn fire_after(&self, ctx: &mut CommandContext) -> crate::Result<()> {
		if ctx.state != FiringState::Proceed {
			return Err(error!(internal!("fire_after called in state {:?}", ctx.state)));
		}
		ctx.state = FiringState::AfterRunning;

		let scope = FiringScope::new();
		let mut pass = FiringPass::new(&scope, ctx.tag.as_ref(), Arc::clone(&ctx.introspection));

		let after = ctx.triggers.class_procs.after.iter().chain(ctx.triggers.any_procs.after.iter());
		for cached in after {
			self.invoke(&mut pass, cached, FiringPhase::After)?;
		}

		ctx.state = FiringState::Done;
		Ok(())
	}

	fn invoke(
		&self,
		pass: &mut FiringPass<'_>,
		cached: &CachedProcedure,
		phase: FiringPhase,
	) -> crate::Result<ProcedureOutput> {
		let Some(def) = self.procedures.find_procedure(cached.procedure) else {
			return Err(error!(internal!(
				"procedure {} of trigger \"{}\" not found in registry",
				cached.procedure, cached.name
			)));
		};

		let args = pass.marshal(phase, def.convention);
		let output = match def.handler.invoke(&args) {
			Ok(output) => output,
			Err(err) => {
				return Err(error!(procedure_invocation_failed(&cached.name, phase, err.diagnostic())));
			}
		};

		// Outside the boolean contract, whatever comes back means
		// "do not veto".
		if def.returns == ReturnContract::Nothing {
			return Ok(ProcedureOutput::null());
		}
		Ok(output)
	}
}

/// Argument state of one firing pass. Identity and deparsed text are
/// resolved at most once per pass, on first need, into the pass scope.
struct FiringPass<'scope> {
	scope: &'scope FiringScope,
	introspection: Arc<dyn CommandIntrospection>,
	tag: Option<&'scope str>,
	identity: Option<MarshalledIdentity<'scope>>,
	command_text: Option<Option<&'scope str>>,
}

#[derive(Clone, Copy)]
struct MarshalledIdentity<'scope> {
	object_id: Option<ObjectId>,
	schema_name: Option<&'scope str>,
	object_name: Option<&'scope str>,
}

impl<'scope> FiringPass<'scope> {
	fn new(
		scope: &'scope FiringScope,
		tag: Option<&CommandTag>,
		introspection: Arc<dyn CommandIntrospection>,
	) -> Self {
		Self {
			scope,
			introspection,
			tag: tag.map(|tag| &*scope.alloc_str(tag.as_str())),
			identity: None,
			command_text: None,
		}
	}

	fn marshal(&mut self, phase: FiringPhase, convention: CallingConvention) -> ProcedureArgs<'_> {
		let identity = self.identity();

		let mut args = ProcedureArgs {
			phase: phase.as_str(),
			tag: self.tag,
			object_id: identity.object_id,
			schema_name: identity.schema_name,
			object_name: identity.object_name,
			command: None,
			command_text: None,
		};

		if convention == CallingConvention::Extended {
			args.command_text = self.command_text();
			args.command = self.introspection.command();
		}

		args
	}

	fn identity(&mut self) -> MarshalledIdentity<'scope> {
		if let Some(identity) = self.identity {
			return identity;
		}

		let scope = self.scope;
		let resolved = self.introspection.object_identity().unwrap_or_default();
		let marshalled = MarshalledIdentity {
			object_id: resolved.object_id,
			schema_name: resolved.schema_name.as_deref().map(|name| &*scope.alloc_str(name)),
			object_name: resolved.object_name.as_deref().map(|name| &*scope.alloc_str(name)),
		};
		self.identity = Some(marshalled);
		marshalled
	}

	fn command_text(&mut self) -> Option<&'scope str> {
		if let Some(text) = self.command_text {
			return text;
		}

		let scope = self.scope;
		let text = self.introspection.deparse().map(|text| &*scope.alloc_str(&text));
		self.command_text = Some(text);
		text
	}
}

#[cfg(test)]
pub mod tests {
	use std::sync::Arc;

	use firegate_catalog::{TriggerCatalog, TriggerToCreate};
	use firegate_core::{
		CommandClass, CommandTag, FiringEvent, FiringPhase, ObjectId, ProcedureId,
		interface::{
			auth::Identity,
			catalog::ReturnContract,
			command::{NoIntrospection, ObjectIdentity, OpaqueCommand},
			procedure::CallingConvention,
		},
	};
	use firegate_testing::{
		LastArgs, TestIntrospection, TestProcedures, TestTransaction, new_call_log, test_catalog,
	};

	use crate::{DispatchEngine, FiringOutcome, FiringState};

	fn engine(catalog: &TriggerCatalog, registry: &TestProcedures) -> DispatchEngine {
		DispatchEngine::new(catalog.cache().clone(), Arc::new(registry.clone()))
	}

	fn register(
		catalog: &TriggerCatalog,
		txn: &mut TestTransaction,
		registry: &TestProcedures,
		name: &str,
		tag: &str,
		phase: FiringPhase,
		procedure: ProcedureId,
	) {
		catalog.register(
			txn,
			&Identity::root(),
			registry,
			TriggerToCreate {
				name: name.to_string(),
				class: CommandClass::from_tag_str(tag),
				event: FiringEvent::DdlCommand,
				phase,
				procedure,
			},
		)
		.unwrap();
	}

	#[test]
	fn test_no_triggers_pays_no_introspection() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();

		let introspection = Arc::new(TestIntrospection::new());
		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				introspection.clone(),
			)
			.unwrap();

		assert!(!ctx.fires_triggers());
		assert_eq!(engine.fire_before_or_instead_of(&mut ctx).unwrap(), FiringOutcome::Proceed);
		engine.fire_after(&mut ctx).unwrap();

		assert_eq!(introspection.identity_calls(), 0);
		assert_eq!(introspection.deparse_calls(), 0);
		assert_eq!(ctx.state(), FiringState::Done);
	}

	#[test]
	fn test_before_veto_stops_the_pass() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let log = new_call_log();
		registry.define_boolean(ProcedureId(1), "allow", true, Some(&log));
		registry.define_boolean(ProcedureId(2), "veto", false, Some(&log));
		registry.define_boolean(ProcedureId(3), "never", true, Some(&log));

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "a_allow", "CREATE TABLE", FiringPhase::Before, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "b_veto", "CREATE TABLE", FiringPhase::Before, ProcedureId(2));
		register(&catalog, &mut txn, &registry, "c_never", "CREATE TABLE", FiringPhase::Before, ProcedureId(3));

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		let outcome = engine.fire_before_or_instead_of(&mut ctx).unwrap();
		assert_eq!(
			outcome,
			FiringOutcome::Cancelled {
				trigger: "b_veto".to_string()
			}
		);
		assert!(!outcome.proceed());
		assert_eq!(outcome.instead_of_count(), 0);
		assert_eq!(ctx.state(), FiringState::Cancelled);

		// The earlier trigger ran; the later one never did.
		assert_eq!(*log.lock().unwrap(), vec!["BEFORE:allow", "BEFORE:veto"]);
	}

	#[test]
	fn test_instead_of_forces_substitution_and_suppresses_before() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let log = new_call_log();
		registry.define_boolean(ProcedureId(1), "replace_a", true, Some(&log));
		// One of them even "vetoes": INSTEAD OF procedures never
		// short-circuit each other.
		registry.define_boolean(ProcedureId(2), "replace_b", false, Some(&log));
		registry.define_boolean(ProcedureId(3), "wildcard_check", true, Some(&log));

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "b_replace", "CREATE TABLE", FiringPhase::InsteadOf, ProcedureId(2));
		register(&catalog, &mut txn, &registry, "a_replace", "CREATE TABLE", FiringPhase::InsteadOf, ProcedureId(1));
		// A wildcard BEFORE trigger exists, but the forced INSTEAD OF
		// phase means no BEFORE procedure may run for this command.
		register(&catalog, &mut txn, &registry, "any_check", "ANY", FiringPhase::Before, ProcedureId(3));

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		let outcome = engine.fire_before_or_instead_of(&mut ctx).unwrap();
		assert_eq!(
			outcome,
			FiringOutcome::Substituted {
				count: 2
			}
		);
		assert!(!outcome.proceed());
		assert_eq!(outcome.instead_of_count(), 2);
		assert_eq!(ctx.state(), FiringState::Substituted);

		// Name order, all of them, and no BEFORE entries at all.
		assert_eq!(*log.lock().unwrap(), vec!["INSTEAD OF:replace_a", "INSTEAD OF:replace_b"]);
	}

	#[test]
	fn test_wildcard_fires_after_specific_class() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let log = new_call_log();
		registry.define_boolean(ProcedureId(1), "specific_z", true, Some(&log));
		registry.define_boolean(ProcedureId(2), "specific_a", true, Some(&log));
		registry.define_boolean(ProcedureId(3), "wildcard_m", true, Some(&log));

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "z_check", "CREATE TABLE", FiringPhase::Before, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "a_check", "CREATE TABLE", FiringPhase::Before, ProcedureId(2));
		register(&catalog, &mut txn, &registry, "m_check", "ANY", FiringPhase::Before, ProcedureId(3));

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		assert_eq!(engine.fire_before_or_instead_of(&mut ctx).unwrap(), FiringOutcome::Proceed);
		assert_eq!(
			*log.lock().unwrap(),
			vec!["BEFORE:specific_a", "BEFORE:specific_z", "BEFORE:wildcard_m"]
		);
	}

	#[test]
	fn test_after_runs_everything_in_order() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let log = new_call_log();
		registry.define_void(ProcedureId(1), "log_b", Some(&log));
		registry.define_void(ProcedureId(2), "log_a", Some(&log));
		registry.define_void(ProcedureId(3), "log_any", Some(&log));

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "b_log", "CREATE TABLE", FiringPhase::After, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "a_log", "CREATE TABLE", FiringPhase::After, ProcedureId(2));
		register(&catalog, &mut txn, &registry, "any_log", "ANY", FiringPhase::After, ProcedureId(3));

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		assert!(ctx.fires_after_triggers());
		assert_eq!(engine.fire_before_or_instead_of(&mut ctx).unwrap(), FiringOutcome::Proceed);
		engine.fire_after(&mut ctx).unwrap();

		assert_eq!(*log.lock().unwrap(), vec!["AFTER:log_a", "AFTER:log_b", "AFTER:log_any"]);
		assert_eq!(ctx.state(), FiringState::Done);
	}

	#[test]
	fn test_null_result_does_not_veto() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let log = new_call_log();
		registry.define_null_boolean(ProcedureId(1), "silent", Some(&log));
		registry.define_boolean(ProcedureId(2), "after_silent", true, Some(&log));

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "a_silent", "CREATE TABLE", FiringPhase::Before, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "b_check", "CREATE TABLE", FiringPhase::Before, ProcedureId(2));

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		assert_eq!(engine.fire_before_or_instead_of(&mut ctx).unwrap(), FiringOutcome::Proceed);
		assert_eq!(*log.lock().unwrap(), vec!["BEFORE:silent", "BEFORE:after_silent"]);
	}

	#[test]
	fn test_procedure_failure_aborts_the_pass() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let log = new_call_log();
		registry.define_failing(ProcedureId(1), "boom", ReturnContract::Boolean, Some(&log));
		registry.define_boolean(ProcedureId(2), "unreached", true, Some(&log));

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "a_boom", "CREATE TABLE", FiringPhase::Before, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "b_check", "CREATE TABLE", FiringPhase::Before, ProcedureId(2));

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		let err = engine.fire_before_or_instead_of(&mut ctx).unwrap_err();
		assert_eq!(err.diagnostic().code, "PR_001");
		assert_eq!(*log.lock().unwrap(), vec!["BEFORE:boom"]);

		// The context is poisoned; restarting the pass is an internal
		// error, not a silent re-fire.
		assert!(engine.fire_before_or_instead_of(&mut ctx).is_err());
	}

	#[test]
	fn test_state_machine_rejects_out_of_order_passes() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();

		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				Arc::new(NoIntrospection),
			)
			.unwrap();

		// AFTER before the BEFORE pass ran.
		assert!(engine.fire_after(&mut ctx).is_err());

		assert_eq!(engine.fire_before_or_instead_of(&mut ctx).unwrap(), FiringOutcome::Proceed);
		// Re-running the BEFORE pass.
		assert!(engine.fire_before_or_instead_of(&mut ctx).is_err());

		engine.fire_after(&mut ctx).unwrap();
		// AFTER twice.
		assert!(engine.fire_after(&mut ctx).is_err());
	}

	#[test]
	fn test_identity_and_deparse_resolved_once_per_pass() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		registry.define_boolean(ProcedureId(1), "first", true, None);
		registry.define_boolean(ProcedureId(2), "second", true, None);
		registry.define_void(ProcedureId(3), "log_after", None);

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "a_check", "CREATE TABLE", FiringPhase::Before, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "b_check", "CREATE TABLE", FiringPhase::Before, ProcedureId(2));
		register(&catalog, &mut txn, &registry, "c_log", "CREATE TABLE", FiringPhase::After, ProcedureId(3));

		let introspection = Arc::new(TestIntrospection::new().with_identity(ObjectIdentity {
			object_id: Some(ObjectId(42)),
			schema_name: Some("public".to_string()),
			object_name: Some("users".to_string()),
		}));
		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				introspection.clone(),
			)
			.unwrap();

		engine.fire_before_or_instead_of(&mut ctx).unwrap();
		assert_eq!(introspection.identity_calls(), 1);

		engine.fire_after(&mut ctx).unwrap();
		// A fresh pass resolves identity again, exactly once.
		assert_eq!(introspection.identity_calls(), 2);

		// Nothing used the extended convention, so nothing deparsed.
		assert_eq!(introspection.deparse_calls(), 0);
	}

	#[test]
	fn test_extended_convention_sees_command_and_text() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let extended: LastArgs = Default::default();
		let basic: LastArgs = Default::default();
		registry.define_capturing(
			ProcedureId(1),
			"probe_extended",
			ReturnContract::Boolean,
			CallingConvention::Extended,
			&extended,
		);
		registry.define_capturing(
			ProcedureId(2),
			"probe_basic",
			ReturnContract::Boolean,
			CallingConvention::Basic,
			&basic,
		);

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "a_ext", "CREATE TABLE", FiringPhase::Before, ProcedureId(1));
		register(&catalog, &mut txn, &registry, "b_basic", "CREATE TABLE", FiringPhase::Before, ProcedureId(2));

		let introspection = Arc::new(
			TestIntrospection::new()
				.with_identity(ObjectIdentity {
					object_id: Some(ObjectId(7)),
					schema_name: Some("public".to_string()),
					object_name: Some("users".to_string()),
				})
				.with_text("CREATE TABLE public.users ()")
				.with_command(OpaqueCommand::new("parse tree stand-in")),
		);
		let mut ctx = engine
			.init_context(
				&mut txn,
				CommandTag::new("CREATE TABLE"),
				FiringEvent::DdlCommand,
				introspection.clone(),
			)
			.unwrap();

		engine.fire_before_or_instead_of(&mut ctx).unwrap();

		let captured = extended.lock().unwrap().clone().unwrap();
		assert_eq!(captured.phase, "BEFORE");
		assert_eq!(captured.tag.as_deref(), Some("CREATE TABLE"));
		assert_eq!(captured.schema_name.as_deref(), Some("public"));
		assert_eq!(captured.object_name.as_deref(), Some("users"));
		assert!(captured.has_command);
		assert_eq!(captured.command_text.as_deref(), Some("CREATE TABLE public.users ()"));

		let captured = basic.lock().unwrap().clone().unwrap();
		assert!(!captured.has_command);
		assert_eq!(captured.command_text, None);

		assert_eq!(introspection.deparse_calls(), 1);
	}

	#[test]
	fn test_wildcard_context_carries_no_tag() {
		let (catalog, _bus) = test_catalog();
		let registry = TestProcedures::new();
		let captured: LastArgs = Default::default();
		registry.define_capturing(
			ProcedureId(1),
			"probe",
			ReturnContract::Boolean,
			CallingConvention::Basic,
			&captured,
		);

		let engine = engine(&catalog, &registry);
		let mut txn = TestTransaction::new();
		register(&catalog, &mut txn, &registry, "any_probe", "ANY", FiringPhase::Before, ProcedureId(1));

		let mut ctx = engine
			.init_wildcard_context(&mut txn, FiringEvent::DdlCommand, Arc::new(NoIntrospection))
			.unwrap();
		assert!(ctx.tag().is_none());

		engine.fire_before_or_instead_of(&mut ctx).unwrap();
		let captured = captured.lock().unwrap().clone().unwrap();
		assert_eq!(captured.tag, None);
	}
}

