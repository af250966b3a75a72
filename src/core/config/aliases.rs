/// Alias table, kept in definition order so `alias` lists names the way
/// they were created.
#[derive(Clone, Debug, Default)]
pub struct AliasManager {
    aliases: Vec<(Box<str>, Box<str>)>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines or overwrites `name`. Overwriting keeps the original position.
    pub fn add(&mut self, name: &str, command: &str) {
        match self.aliases.iter_mut().find(|(key, _)| &**key == name) {
            Some((_, existing)) => *existing = command.into(),
            None => self.aliases.push((name.into(), command.into())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(key, _)| &**key == name)
            .map(|(_, value)| &**value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(|(k, _)| &**k)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_alias() {
        let mut manager = AliasManager::new();
        manager.add("ll", "ls -la");
        assert_eq!(manager.get("ll"), Some("ls -la"));
        assert_eq!(manager.get("la"), None);
    }

    #[test]
    fn test_overwrite_alias() {
        let mut manager = AliasManager::new();
        manager.add("ll", "ls -la");
        manager.add("gs", "git status");
        manager.add("ll", "ls -l");

        let all: Vec<_> = manager.iter().collect();
        assert_eq!(all, vec![("ll", "ls -l"), ("gs", "git status")]);
    }

    #[test]
    fn test_names_in_definition_order() {
        let mut manager = AliasManager::new();
        assert!(manager.is_empty());
        manager.add("zz", "true");
        manager.add("aa", "false");
        assert_eq!(manager.names().collect::<Vec<_>>(), vec!["zz", "aa"]);
    }
}
