use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;

use super::ports::TextObjectStorage;
use crate::kernel::Action;

#[derive(Debug)]
pub enum KernelMessage {
    Action(Action),
}

/// Owns the receiving end of the action bus and the storage port.
pub struct KernelServiceHost {
    tx: Sender<KernelMessage>,
    rx: Receiver<KernelMessage>,
    storage: Arc<dyn TextObjectStorage>,
}

/// Cheap handle given to anything that needs to dispatch or persist.
#[derive(Clone)]
pub struct KernelServiceContext {
    tx: Sender<KernelMessage>,
    storage: Arc<dyn TextObjectStorage>,
}

impl KernelServiceHost {
    pub fn new(storage: Arc<dyn TextObjectStorage>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, storage }
    }

    pub fn context(&self) -> KernelServiceContext {
        KernelServiceContext {
            tx: self.tx.clone(),
            storage: Arc::clone(&self.storage),
        }
    }

    pub fn storage(&self) -> &Arc<dyn TextObjectStorage> {
        &self.storage
    }

    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }
}

impl KernelServiceContext {
    pub fn dispatch(&self, action: Action) {
        if self.tx.send(KernelMessage::Action(action)).is_err() {
            tracing::debug!("action dropped: kernel bus closed");
        }
    }

    pub fn storage(&self) -> &Arc<dyn TextObjectStorage> {
        &self.storage
    }
}
