// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Worker-indexed workspaces.
//!
//! The registry holds one [`WorkerSlot`] per worker. A slot allocates its
//! workspace lazily on first acquire, keeps it across batches, and frees it
//! on release or drop. [`WorkspaceRegistry::slots_mut`] hands out disjoint
//! slots so each worker thread owns its own without locking.

use core::fmt;

use wpapsk_alloc::BufferAllocator;

use crate::error::WpapskError;
use crate::kernel::Kernel;
use crate::workspace::Workspace;

/// Index of a worker within a [`WorkspaceRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(usize);

impl WorkerId {
    /// Worker `index`.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for WorkerId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// One worker's workspace, allocated on demand.
#[derive(Debug)]
pub struct WorkerSlot {
    id: WorkerId,
    kernel: Kernel,
    allocator: BufferAllocator,
    workspace: Option<Workspace>,
}

impl WorkerSlot {
    fn new(id: WorkerId, kernel: Kernel, allocator: BufferAllocator) -> Self {
        Self {
            id,
            kernel,
            allocator,
            workspace: None,
        }
    }

    /// Worker this slot belongs to.
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Whether a workspace is allocated.
    pub fn is_acquired(&self) -> bool {
        self.workspace.is_some()
    }

    /// Allocates the workspace if needed and returns it.
    ///
    /// Idempotent: an acquired slot returns its existing workspace.
    pub fn acquire(&mut self) -> Result<&mut Workspace, WpapskError> {
        let workspace = match self.workspace.take() {
            Some(workspace) => workspace,
            None => Workspace::with_allocator(self.kernel, &self.allocator)?,
        };

        Ok(self.workspace.insert(workspace))
    }

    /// The acquired workspace.
    pub fn workspace(&mut self) -> Result<&mut Workspace, WpapskError> {
        self.workspace.as_mut().ok_or(WpapskError::NotAcquired {
            worker: self.id.index(),
        })
    }

    /// Zeroizes and frees the workspace. No-op if none is allocated.
    pub fn release(&mut self) {
        if let Some(workspace) = self.workspace.take() {
            workspace.release();
        }
    }
}

/// Workspaces for a fixed number of workers.
#[derive(Debug)]
pub struct WorkspaceRegistry {
    kernel: Kernel,
    slots: Vec<WorkerSlot>,
}

impl WorkspaceRegistry {
    /// Registry for `workers` workers, all unacquired.
    pub fn new(workers: usize, kernel: Kernel) -> Self {
        Self::with_allocator(workers, kernel, BufferAllocator::new())
    }

    /// Registry whose workspaces come from `allocator`.
    pub fn with_allocator(workers: usize, kernel: Kernel, allocator: BufferAllocator) -> Self {
        let slots = (0..workers)
            .map(|index| WorkerSlot::new(WorkerId(index), kernel, allocator.clone()))
            .collect();

        Self { kernel, slots }
    }

    /// Kernel every workspace is laid out for.
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Number of workers.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry has no workers.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot for `worker`.
    pub fn slot_mut(&mut self, worker: WorkerId) -> Result<&mut WorkerSlot, WpapskError> {
        let workers = self.slots.len();
        self.slots
            .get_mut(worker.index())
            .ok_or(WpapskError::WorkerOutOfRange {
                worker: worker.index(),
                workers,
            })
    }

    /// Allocates `worker`'s workspace if needed and returns it.
    pub fn acquire(&mut self, worker: WorkerId) -> Result<&mut Workspace, WpapskError> {
        self.slot_mut(worker)?.acquire()
    }

    /// `worker`'s acquired workspace.
    pub fn workspace(&mut self, worker: WorkerId) -> Result<&mut Workspace, WpapskError> {
        self.slot_mut(worker)?.workspace()
    }

    /// Frees `worker`'s workspace. No-op if it was never acquired.
    pub fn release(&mut self, worker: WorkerId) -> Result<(), WpapskError> {
        self.slot_mut(worker)?.release();
        Ok(())
    }

    /// Frees every workspace.
    pub fn release_all(&mut self) {
        self.slots.iter_mut().for_each(WorkerSlot::release);
    }

    /// Every slot, for handing one to each worker thread.
    pub fn slots_mut(&mut self) -> &mut [WorkerSlot] {
        &mut self.slots
    }
}
