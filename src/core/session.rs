//! Operator session: the process-wide client state with an explicit
//! lifecycle. The session is created once at startup (restoring any
//! persisted lock), injected where needed, and mutated only through
//! `lock`/`unlock`.

use crate::core::docket;
use crate::errors::{AppError, AppResult};
use crate::local::store::{LocalStore, OperatorLock};
use crate::models::reference::Operator;
use crate::utils::date::today;

pub struct SessionState {
    operators: Vec<Operator>,
    current: Option<Operator>,
    locked: bool,
    store: LocalStore,
}

impl SessionState {
    /// Restore session state from the local store. A persisted lock for
    /// an operator no longer in the list is discarded, same as any other
    /// stale local data.
    pub fn init(operators: Vec<Operator>, store: LocalStore) -> Self {
        let mut session = Self {
            operators,
            current: None,
            locked: false,
            store,
        };
        if let Some(saved) = session.store.operator_lock() {
            if let Some(op) = session.find(saved.opkey) {
                session.current = Some(op);
                session.locked = saved.locked;
            }
        }
        session
    }

    fn find(&self, opkey: i64) -> Option<Operator> {
        self.operators.iter().find(|op| op.opkey == opkey).cloned()
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn current(&self) -> Option<&Operator> {
        self.current.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Select an operator without locking; the pre-lock dropdown state.
    pub fn select(&mut self, opkey: i64) -> AppResult<()> {
        let op = self.find(opkey).ok_or(AppError::UnknownOperator(opkey))?;
        self.current = Some(op);
        Ok(())
    }

    /// Lock the session onto an operator. Requires a successful lookup
    /// against the loaded operator list, and persists the slot.
    pub fn lock(&mut self, opkey: i64) -> AppResult<()> {
        let op = self.find(opkey).ok_or(AppError::UnknownOperator(opkey))?;
        self.current = Some(op);
        self.locked = true;
        self.store
            .set_operator_lock(&OperatorLock { opkey, locked: true })
    }

    /// Unlock and clear the persisted slot. The selection survives in
    /// memory so the dropdown stays on the last operator.
    pub fn unlock(&mut self) -> AppResult<()> {
        self.locked = false;
        self.store.clear_operator_lock()
    }

    /// Today's docket for the locked operator.
    pub fn docket(&self) -> AppResult<String> {
        match (&self.current, self.locked) {
            (Some(op), true) => Ok(docket::generate(op.opkey, today())),
            _ => Err(AppError::OperatorNotLocked),
        }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LocalStore {
        &mut self.store
    }
}
