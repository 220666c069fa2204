// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{Arc, Weak};

/// Non-owning handle that can be turned back into an owning `T`.
///
/// Liveness is checked on every call; nothing is cached.
pub(crate) trait Upgrade<T>: Send + Sync {
    fn upgrade(&self) -> Option<T>;

    fn is_alive(&self) -> bool;
}

impl<U> Upgrade<Arc<U>> for Weak<U>
where
    U: ?Sized + Send + Sync,
{
    fn upgrade(&self) -> Option<Arc<U>> {
        Weak::upgrade(self)
    }

    fn is_alive(&self) -> bool {
        self.strong_count() > 0
    }
}
