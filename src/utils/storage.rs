use thiserror::Error;
use web_sys::{window, Storage};

use super::constants::STORAGE_KEY_TOKEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("Error escribiendo en localStorage: {0}")]
    Write(String),
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Almacenamiento durable del bearer token.
///
/// The browser implementation is [`LocalTokenStore`]; tests swap in an in-memory one.
pub trait TokenStore {
    /// Stored token, if any. Empty strings count as no token.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Token guardado como string plano bajo la clave `token` de localStorage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        let storage = get_local_storage()?;
        let token = storage.get_item(STORAGE_KEY_TOKEN).ok()??;
        (!token.is_empty()).then_some(token)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(STORAGE_KEY_TOKEN, token)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(STORAGE_KEY_TOKEN)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{StorageError, TokenStore};

    #[derive(Clone, Default)]
    pub struct MemoryTokenStore {
        token: Rc<RefCell<Option<String>>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl MemoryTokenStore {
        pub fn with_token(token: &str) -> Self {
            let store = Self::default();
            *store.token.borrow_mut() = Some(token.to_string());
            store
        }

        pub fn failing() -> Self {
            let store = Self::default();
            store.fail_writes.set(true);
            store
        }

        pub fn raw(&self) -> Option<String> {
            self.token.borrow().clone()
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone().filter(|t| !t.is_empty())
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            *self.token.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Unavailable);
            }
            *self.token.borrow_mut() = None;
            Ok(())
        }
    }
}
