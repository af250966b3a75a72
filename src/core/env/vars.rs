use super::EnvError;
use std::env;

/// The shell's own copy of the environment. Children see it through
/// [`EnvVarManager::iter`]; the process environment is never written.
#[derive(Clone, Debug, Default)]
pub struct EnvVarManager {
    vars: Vec<(Box<str>, Box<str>)>,
}

impl EnvVarManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the inherited environment, in the order the OS reports it.
    pub fn from_process() -> Self {
        let mut manager = Self::new();
        for (key, value) in env::vars_os() {
            if let (Some(key), Some(value)) = (key.to_str(), value.to_str()) {
                if is_valid_name(key) {
                    manager.insert(key, value);
                }
            }
        }
        manager
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidValue("Empty variable name"));
        }
        if name.contains('=') {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        self.insert(name, value);
        Ok(())
    }

    fn insert(&mut self, name: &str, value: &str) {
        match self.vars.iter_mut().find(|(key, _)| &**key == name) {
            Some((_, existing)) => *existing = value.into(),
            None => self.vars.push((name.into(), value.into())),
        }
    }

    /// Removes `name`; returns whether it was present.
    pub fn unset(&mut self, name: &str) -> bool {
        let before = self.vars.len();
        self.vars.retain(|(key, _)| &**key != name);
        self.vars.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| &**key == name)
            .map(|(_, value)| &**value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() -> Result<(), EnvError> {
        let mut manager = EnvVarManager::new();
        manager.set("TEST_VAR", "test value")?;
        assert_eq!(manager.get("TEST_VAR"), Some("test value"));
        Ok(())
    }

    #[test]
    fn test_overwrite_keeps_position() -> Result<(), EnvError> {
        let mut manager = EnvVarManager::new();
        manager.set("A", "1")?;
        manager.set("B", "2")?;
        manager.set("A", "3")?;

        let pairs: Vec<_> = manager.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
        Ok(())
    }

    #[test]
    fn test_unset() -> Result<(), EnvError> {
        let mut manager = EnvVarManager::new();
        manager.set("GONE", "x")?;
        assert!(manager.unset("GONE"));
        assert!(!manager.unset("GONE"));
        assert_eq!(manager.get("GONE"), None);
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_var_name() {
        let mut manager = EnvVarManager::new();
        assert!(manager.set("", "value").is_err());
        assert!(matches!(
            manager.set("A=B", "value"),
            Err(EnvError::InvalidName(_))
        ));
    }

    #[test]
    fn test_from_process_sees_path() {
        let manager = EnvVarManager::from_process();
        assert_eq!(manager.get("PATH").map(str::to_owned), env::var("PATH").ok());
    }
}
