//! Declarative scenarios executed through real [`Reference`] proxies.
//!
//! A script declares named cells of primitive storage types, named proxies
//! bound to those cells (optionally exposing another primitive type) and a
//! list of operations. Every operation is carried out by a
//! `Reference<T, U>` built for the proxy's storage/exposed pair, so the
//! results are exactly what library users get.
//!
//! ```yaml
//! cells:
//!   - { name: counter, storage: i32, value: 5 }
//! proxies:
//!   - { name: p, cell: counter }
//! ops:
//!   - { op: add_assign, proxy: p, value: 3 }
//!   - { op: post_increment, proxy: p }
//!   - { op: pre_increment, proxy: p }
//! ```

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cast::{CastFrom, CastInto};
use crate::config::SourceType;
use crate::raw::RawValue;
use crate::reference::Reference;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cell `{0}` is declared more than once")]
    DuplicateCell(String),
    #[error("proxy `{0}` is declared more than once")]
    DuplicateProxy(String),
    #[error("no cell named `{0}`")]
    UnknownCell(String),
    #[error("no proxy named `{0}`")]
    UnknownProxy(String),
    #[error("cannot {op} proxy `{proxy}` over {expected} storage with a {found} cell")]
    StorageMismatch {
        op: &'static str,
        proxy: String,
        expected: ScalarKind,
        found: ScalarKind,
    },
    #[error("invalid {format:?} script")]
    Parse {
        format: SourceType,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// A number as written in a script or reported back.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    UInt(u64),
    Int(i64),
    Float(f64),
}

impl Default for Literal {
    fn default() -> Self {
        Literal::UInt(0)
    }
}

impl Literal {
    /// Casts the literal into a scalar type with `as` semantics.
    pub fn cast<T: Scalar>(self) -> T {
        match self {
            Literal::UInt(v) => T::cast_from(v),
            Literal::Int(v) => T::cast_from(v),
            Literal::Float(v) => T::cast_from(v),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::UInt(v) => write!(f, "{v}"),
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Primitive types a script cell or proxy may use.
///
/// Every scalar converts to and from every other one with `as` semantics.
pub trait Scalar:
    RawValue
    + fmt::Debug
    + 'static
    + CastFrom<u8>
    + CastFrom<u16>
    + CastFrom<u32>
    + CastFrom<u64>
    + CastFrom<usize>
    + CastFrom<i8>
    + CastFrom<i16>
    + CastFrom<i32>
    + CastFrom<i64>
    + CastFrom<isize>
    + CastFrom<f32>
    + CastFrom<f64>
    + CastInto<u8>
    + CastInto<u16>
    + CastInto<u32>
    + CastInto<u64>
    + CastInto<usize>
    + CastInto<i8>
    + CastInto<i16>
    + CastInto<i32>
    + CastInto<i64>
    + CastInto<isize>
    + CastInto<f32>
    + CastInto<f64>
{
    const KIND: ScalarKind;

    fn to_literal(self) -> Literal;

    /// The cell inside `slot`, if it stores `Self`.
    fn slot_cell(slot: &Slot) -> Option<&Cell<Self>>;
}

macro_rules! scalars {
    ($($V:ident $T:ident $L:ident),* $(,)?) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum ScalarKind {
            $($V),*
        }

        impl ScalarKind {
            pub const ALL: &'static [ScalarKind] = &[$(ScalarKind::$V),*];

            pub fn name(self) -> &'static str {
                match self {
                    $(ScalarKind::$V => stringify!($T)),*
                }
            }
        }

        /// A cell of any supported scalar type.
        #[derive(Debug)]
        pub enum Slot {
            $($V(Cell<$T>)),*
        }

        impl Slot {
            pub fn new(kind: ScalarKind, value: Literal) -> Self {
                match kind {
                    $(ScalarKind::$V => Slot::$V(Cell::new(value.cast()))),*
                }
            }

            pub fn kind(&self) -> ScalarKind {
                match self {
                    $(Slot::$V(_) => ScalarKind::$V),*
                }
            }

            /// Current raw value of the cell.
            pub fn value(&self) -> Literal {
                match self {
                    $(Slot::$V(cell) => cell.get().to_literal()),*
                }
            }

            fn apply(&self, exposed: ScalarKind, action: &Action<'_>) -> Option<Literal> {
                match self {
                    $(Slot::$V(cell) => apply_exposed(cell, exposed, action)),*
                }
            }
        }

        fn apply_exposed<T: Scalar>(
            cell: &Cell<T>,
            exposed: ScalarKind,
            action: &Action<'_>,
        ) -> Option<Literal> {
            match exposed {
                $(ScalarKind::$V => execute(Reference::<T, $T>::new(cell), action)),*
            }
        }

        $(
            impl Scalar for $T {
                const KIND: ScalarKind = ScalarKind::$V;

                #[inline]
                fn to_literal(self) -> Literal {
                    Literal::$L(self.cast_into())
                }

                #[inline]
                fn slot_cell(slot: &Slot) -> Option<&Cell<Self>> {
                    match slot {
                        Slot::$V(cell) => Some(cell),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalars! {
    U8 u8 UInt,
    U16 u16 UInt,
    U32 u32 UInt,
    U64 u64 UInt,
    Usize usize UInt,
    I8 i8 Int,
    I16 i16 Int,
    I32 i32 Int,
    I64 i64 Int,
    Isize isize Int,
    F32 f32 Float,
    F64 f64 Float,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One operation, resolved against the session's cells.
enum Action<'a> {
    Read,
    Set(Literal),
    AddAssign(Literal),
    SubAssign(Literal),
    PostIncrement,
    PreIncrement,
    Assign(&'a Slot),
}

fn execute<T, U>(proxy: Reference<'_, T, U>, action: &Action<'_>) -> Option<Literal>
where
    T: Scalar + CastInto<U>,
    U: Scalar + CastInto<T>,
{
    let value = match *action {
        Action::Read => proxy.get(),
        Action::Set(v) => proxy.set(v.cast()).get(),
        Action::AddAssign(v) => proxy.add_assign(v.cast()).get(),
        Action::SubAssign(v) => proxy.sub_assign(v.cast()).get(),
        Action::PostIncrement => proxy.post_increment(),
        Action::PreIncrement => proxy.pre_increment().get(),
        Action::Assign(source) => {
            let source = Reference::<T>::new(T::slot_cell(source)?);
            proxy.assign(&source).get()
        }
    };
    Some(value.to_literal())
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellDecl {
    pub name: String,
    pub storage: ScalarKind,
    #[serde(default)]
    pub value: Literal,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyDecl {
    pub name: String,
    pub cell: String,
    /// Defaults to the cell's storage type.
    #[serde(default)]
    pub exposed: Option<ScalarKind>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Read { proxy: String },
    Set { proxy: String, value: Literal },
    Assign { proxy: String, from: String },
    AddAssign { proxy: String, value: Literal },
    SubAssign { proxy: String, value: Literal },
    PostIncrement { proxy: String },
    PreIncrement { proxy: String },
    Rebind { proxy: String, cell: String },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Read { .. } => "read",
            Op::Set { .. } => "set",
            Op::Assign { .. } => "assign",
            Op::AddAssign { .. } => "add_assign",
            Op::SubAssign { .. } => "sub_assign",
            Op::PostIncrement { .. } => "post_increment",
            Op::PreIncrement { .. } => "pre_increment",
            Op::Rebind { .. } => "rebind",
        }
    }

    /// The proxy this operation goes through.
    pub fn proxy(&self) -> &str {
        match self {
            Op::Read { proxy }
            | Op::Set { proxy, .. }
            | Op::Assign { proxy, .. }
            | Op::AddAssign { proxy, .. }
            | Op::SubAssign { proxy, .. }
            | Op::PostIncrement { proxy }
            | Op::PreIncrement { proxy }
            | Op::Rebind { proxy, .. } => proxy,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub cells: Vec<CellDecl>,
    #[serde(default)]
    pub proxies: Vec<ProxyDecl>,
    #[serde(default)]
    pub ops: Vec<Op>,
}

impl Script {
    pub fn parse(text: &str, format: SourceType) -> Result<Self, ScriptError> {
        let parse_error = |source: Box<dyn std::error::Error + Send + Sync + 'static>| {
            ScriptError::Parse { format, source }
        };
        match format {
            #[cfg(feature = "json")]
            SourceType::Json => serde_json::from_str(text).map_err(|e| parse_error(e.into())),
            #[cfg(feature = "yaml")]
            SourceType::Yaml => serde_yaml::from_str(text).map_err(|e| parse_error(e.into())),
        }
    }

    pub fn run(&self) -> Result<Report, ScriptError> {
        run(self)
    }
}

/// Value observed through a proxy after one operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub op: &'static str,
    pub proxy: String,
    /// Cell the proxy targets once the operation is done.
    pub cell: String,
    /// `post_increment` reports the value it returned; every other operation
    /// reports a read through the proxy afterwards.
    pub value: Literal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellValue {
    pub name: String,
    pub storage: ScalarKind,
    pub value: Literal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub steps: Vec<Step>,
    pub cells: Vec<CellValue>,
}

impl Report {
    /// Final value of the named cell.
    pub fn cell(&self, name: &str) -> Option<Literal> {
        self.cells.iter().find(|c| c.name == name).map(|c| c.value)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(
                f,
                "#{} {} {} -> {} = {}",
                step.index, step.op, step.proxy, step.cell, step.value
            )?;
        }
        for cell in &self.cells {
            writeln!(f, "{}: {} = {}", cell.name, cell.storage, cell.value)?;
        }
        Ok(())
    }
}

struct Arena {
    names: Vec<String>,
    index: HashMap<String, usize>,
    slots: Vec<Slot>,
}

impl Arena {
    fn new(decls: &[CellDecl]) -> Result<Self, ScriptError> {
        let mut arena = Arena {
            names: Vec::with_capacity(decls.len()),
            index: HashMap::with_capacity(decls.len()),
            slots: Vec::with_capacity(decls.len()),
        };
        for decl in decls {
            if arena.index.insert(decl.name.clone(), arena.slots.len()).is_some() {
                return Err(ScriptError::DuplicateCell(decl.name.clone()));
            }
            let slot = Slot::new(decl.storage, decl.value);
            trace!("cell `{}`: {} = {}", decl.name, decl.storage, slot.value());
            arena.names.push(decl.name.clone());
            arena.slots.push(slot);
        }
        Ok(arena)
    }

    fn lookup(&self, name: &str) -> Result<usize, ScriptError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ScriptError::UnknownCell(name.to_string()))
    }

    fn values(&self) -> Vec<CellValue> {
        self.names
            .iter()
            .zip(&self.slots)
            .map(|(name, slot)| CellValue {
                name: name.clone(),
                storage: slot.kind(),
                value: slot.value(),
            })
            .collect()
    }
}

struct Handle {
    cell: usize,
    exposed: ScalarKind,
}

struct Session<'a> {
    arena: &'a Arena,
    index: HashMap<String, usize>,
    handles: Vec<Handle>,
}

impl<'a> Session<'a> {
    fn new(arena: &'a Arena, decls: &[ProxyDecl]) -> Result<Self, ScriptError> {
        let mut session = Session {
            arena,
            index: HashMap::with_capacity(decls.len()),
            handles: Vec::with_capacity(decls.len()),
        };
        for decl in decls {
            if session.index.contains_key(&decl.name) {
                return Err(ScriptError::DuplicateProxy(decl.name.clone()));
            }
            let cell = arena.lookup(&decl.cell)?;
            let exposed = decl.exposed.unwrap_or_else(|| arena.slots[cell].kind());
            trace!(
                "proxy `{}` bound to `{}` as {}",
                decl.name,
                decl.cell,
                exposed
            );
            session
                .index
                .insert(decl.name.clone(), session.handles.len());
            session.handles.push(Handle { cell, exposed });
        }
        Ok(session)
    }

    fn handle(&self, name: &str) -> Result<usize, ScriptError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ScriptError::UnknownProxy(name.to_string()))
    }

    fn slot(&self, handle: usize) -> &'a Slot {
        &self.arena.slots[self.handles[handle].cell]
    }

    fn apply(&self, handle: usize, action: &Action<'_>) -> Option<Literal> {
        self.slot(handle).apply(self.handles[handle].exposed, action)
    }

    fn mismatch(&self, op: &Op, handle: usize, other: &Slot) -> ScriptError {
        ScriptError::StorageMismatch {
            op: op.name(),
            proxy: op.proxy().to_string(),
            expected: self.slot(handle).kind(),
            found: other.kind(),
        }
    }

    fn execute(&mut self, index: usize, op: &Op) -> Result<Step, ScriptError> {
        let handle = self.handle(op.proxy())?;
        let value = match op {
            Op::Read { .. } => self.apply(handle, &Action::Read),
            Op::Set { value, .. } => self.apply(handle, &Action::Set(*value)),
            Op::AddAssign { value, .. } => self.apply(handle, &Action::AddAssign(*value)),
            Op::SubAssign { value, .. } => self.apply(handle, &Action::SubAssign(*value)),
            Op::PostIncrement { .. } => self.apply(handle, &Action::PostIncrement),
            Op::PreIncrement { .. } => self.apply(handle, &Action::PreIncrement),
            Op::Assign { from, .. } => {
                let source = self.slot(self.handle(from)?);
                match self.apply(handle, &Action::Assign(source)) {
                    Some(value) => Some(value),
                    None => return Err(self.mismatch(op, handle, source)),
                }
            }
            Op::Rebind { cell, .. } => {
                let target = self.arena.lookup(cell)?;
                let slot = &self.arena.slots[target];
                if slot.kind() != self.slot(handle).kind() {
                    return Err(self.mismatch(op, handle, slot));
                }
                self.handles[handle].cell = target;
                self.apply(handle, &Action::Read)
            }
        };
        // Only `assign` can fail to apply, and it is handled above.
        let value = value.unwrap_or_default();
        let cell = self.arena.names[self.handles[handle].cell].clone();
        debug!("#{} {} `{}` -> `{}` = {}", index, op.name(), op.proxy(), cell, value);
        Ok(Step {
            index,
            op: op.name(),
            proxy: op.proxy().to_string(),
            cell,
            value,
        })
    }
}

/// Allocates the script's cells, binds its proxies and executes its
/// operations in order.
pub fn run(script: &Script) -> Result<Report, ScriptError> {
    let arena = Arena::new(&script.cells)?;
    let mut session = Session::new(&arena, &script.proxies)?;
    let steps = script
        .ops
        .iter()
        .enumerate()
        .map(|(index, op)| session.execute(index, op))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "ran {} operations over {} cells through {} proxies",
        steps.len(),
        arena.slots.len(),
        session.handles.len()
    );
    Ok(Report {
        steps,
        cells: arena.values(),
    })
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    fn run_json(text: &str) -> Result<Report, ScriptError> {
        Script::parse(text, SourceType::Json)?.run()
    }

    fn values(report: &Report) -> Vec<Literal> {
        report.steps.iter().map(|s| s.value).collect()
    }

    #[test]
    fn counter_scenario() {
        let report = run_json(
            r#"{
                "cells": [{ "name": "c", "storage": "i32", "value": 5 }],
                "proxies": [{ "name": "p", "cell": "c" }],
                "ops": [
                    { "op": "add_assign", "proxy": "p", "value": 3 },
                    { "op": "post_increment", "proxy": "p" },
                    { "op": "pre_increment", "proxy": "p" },
                    { "op": "sub_assign", "proxy": "p", "value": 12 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            values(&report),
            [
                Literal::Int(8),
                Literal::Int(8),
                Literal::Int(10),
                Literal::Int(-2)
            ]
        );
        assert_eq!(report.cell("c"), Some(Literal::Int(-2)));
    }

    #[test]
    fn proxy_assignment_copies_value() {
        let report = run_json(
            r#"{
                "cells": [
                    { "name": "c1", "storage": "u32", "value": 10 },
                    { "name": "c2", "storage": "u32", "value": 20 },
                    { "name": "c3", "storage": "u32", "value": 30 }
                ],
                "proxies": [
                    { "name": "p1", "cell": "c1" },
                    { "name": "p2", "cell": "c2", "exposed": "u8" }
                ],
                "ops": [
                    { "op": "assign", "proxy": "p1", "from": "p2" },
                    { "op": "rebind", "proxy": "p2", "cell": "c3" },
                    { "op": "read", "proxy": "p1" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(report.steps[0].cell, "c1");
        assert_eq!(report.steps[1].cell, "c3");
        assert_eq!(values(&report), [Literal::UInt(20), Literal::UInt(30), Literal::UInt(20)]);
        assert_eq!(report.cell("c1"), Some(Literal::UInt(20)));
        assert_eq!(report.cell("c2"), Some(Literal::UInt(20)));
        assert_eq!(report.cell("c3"), Some(Literal::UInt(30)));
    }

    #[test]
    fn exposed_type_converts_both_ways() {
        let report = run_json(
            r#"{
                "cells": [
                    { "name": "reg", "storage": "u16", "value": 4660 },
                    { "name": "temp", "storage": "i16" }
                ],
                "proxies": [
                    { "name": "low", "cell": "reg", "exposed": "u8" },
                    { "name": "celsius", "cell": "temp", "exposed": "f64" }
                ],
                "ops": [
                    { "op": "read", "proxy": "low" },
                    { "op": "set", "proxy": "low", "value": 255 },
                    { "op": "set", "proxy": "celsius", "value": -3.75 },
                    { "op": "post_increment", "proxy": "low" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            values(&report),
            [
                Literal::UInt(0x34),
                Literal::UInt(0xff),
                Literal::Float(-3.0),
                Literal::UInt(0xff)
            ]
        );
        assert_eq!(report.cell("reg"), Some(Literal::UInt(0x100)));
        assert_eq!(report.cell("temp"), Some(Literal::Int(-3)));
    }

    #[test]
    fn rebind_across_storage_types_fails() {
        let err = run_json(
            r#"{
                "cells": [
                    { "name": "a", "storage": "u8" },
                    { "name": "b", "storage": "i64" }
                ],
                "proxies": [{ "name": "p", "cell": "a" }],
                "ops": [{ "op": "rebind", "proxy": "p", "cell": "b" }]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::StorageMismatch {
                op: "rebind",
                expected: ScalarKind::U8,
                found: ScalarKind::I64,
                ..
            }
        ));
    }

    #[test]
    fn assign_across_storage_types_fails() {
        let err = run_json(
            r#"{
                "cells": [
                    { "name": "a", "storage": "u8" },
                    { "name": "b", "storage": "u16" }
                ],
                "proxies": [
                    { "name": "p", "cell": "a" },
                    { "name": "q", "cell": "b", "exposed": "u8" }
                ],
                "ops": [{ "op": "assign", "proxy": "p", "from": "q" }]
            }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot assign proxy `p` over u8 storage with a u16 cell"
        );
    }

    #[test]
    fn unknown_and_duplicate_names() {
        let err = run_json(r#"{ "cells": [{ "name": "a", "storage": "u8" }, { "name": "a", "storage": "u8" }] }"#)
            .unwrap_err();
        assert!(matches!(err, ScriptError::DuplicateCell(name) if name == "a"));

        let err = run_json(
            r#"{ "cells": [{ "name": "a", "storage": "u8" }], "proxies": [{ "name": "p", "cell": "b" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCell(name) if name == "b"));

        let err = run_json(
            r#"{
                "cells": [{ "name": "a", "storage": "u8" }],
                "proxies": [{ "name": "p", "cell": "a" }, { "name": "p", "cell": "a" }]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::DuplicateProxy(name) if name == "p"));

        let err = run_json(
            r#"{ "cells": [{ "name": "a", "storage": "u8" }], "ops": [{ "op": "read", "proxy": "q" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::UnknownProxy(name) if name == "q"));
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = Script::parse(r#"{ "cells": [{ "name": "a", "storage": "u128" }] }"#, SourceType::Json)
            .unwrap_err();
        assert!(matches!(err, ScriptError::Parse { format: SourceType::Json, .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn integer_cells_wrap() {
        let report = run_json(
            r#"{
                "cells": [{ "name": "c", "storage": "u8", "value": 255 }],
                "proxies": [{ "name": "p", "cell": "c" }],
                "ops": [{ "op": "pre_increment", "proxy": "p" }]
            }"#,
        )
        .unwrap();
        assert_eq!(report.cell("c"), Some(Literal::UInt(0)));
    }

    #[test]
    fn every_kind_has_a_serde_name() {
        for &kind in ScalarKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: ScalarKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
            assert_eq!(Slot::new(kind, Literal::Int(-1)).kind(), kind);
        }
    }

    #[test]
    fn report_text_layout() {
        let report = run_json(
            r#"{
                "cells": [{ "name": "c", "storage": "i8", "value": -1 }],
                "proxies": [{ "name": "p", "cell": "c" }],
                "ops": [{ "op": "post_increment", "proxy": "p" }]
            }"#,
        )
        .unwrap();
        assert_eq!(report.to_string(), "#0 post_increment p -> c = -1\nc: i8 = 0\n");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn counter_demo() {
        let script = Script::parse(
            include_str!("../demos/counter.yaml"),
            SourceType::Yaml,
        )
        .unwrap();
        let report = script.run().unwrap();
        assert_eq!(values(&report)[3], Literal::UInt(0x34));
        assert_eq!(values(&report)[7], Literal::UInt(0));
        assert_eq!(report.cell("counter"), Some(Literal::Int(10)));
        assert_eq!(report.cell("status"), Some(Literal::UInt(255)));
        assert_eq!(report.cell("shadow"), Some(Literal::UInt(256)));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_scripts() {
        let script = Script::parse(
            "
cells:
  - { name: a, storage: f32, value: 1.5 }
proxies:
  - { name: p, cell: a, exposed: i32 }
ops:
  - { op: add_assign, proxy: p, value: 2 }
  - { op: read, proxy: p }
",
            SourceType::Yaml,
        )
        .unwrap();
        let report = script.run().unwrap();
        assert_eq!(values(&report), [Literal::Int(3), Literal::Int(3)]);
        assert_eq!(report.cell("a"), Some(Literal::Float(3.5)));
    }
}
