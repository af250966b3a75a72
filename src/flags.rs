use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    script: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        let mut add = |name: &str, short: &str, long: &str, description: &str, takes_value| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", "-h", "--help", "Print this help message", false);
        add("version", "-v", "--version", "Show version information", false);
        add("config", "-c", "--config", "Read startup commands from FILE instead of ~/.shoalrc", true);
        add("quiet", "-q", "--quiet", "No prompt, suppress warnings", false);
        add("debug", "-d", "--debug", "Enable debug logging", false);

        Flags {
            flags,
            script: None,
        }
    }

    /// Parses `args` (without the program name). The first argument that is not a
    /// flag names a script; anything after it is ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if !arg.starts_with('-') {
                self.script = Some(arg.clone());
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown option {}", arg)))?;

            if flag.takes_value {
                match args.get(i + 1) {
                    Some(value) => {
                        flag.value = Some(value.clone());
                        i += 1;
                    }
                    None => {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )))
                    }
                }
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn print_help(&self) {
        println!("Usage: shoal [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
