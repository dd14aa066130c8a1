use serde::{Deserialize, Serialize};

/// How often a task is expected to be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Daily,
    Weekly,
}

/// One of the fixed habits tracked per day.
///
/// Everything that shows or transmits per-task data iterates [`Task::ALL`],
/// so adding a habit means adding a variant here plus its fields on
/// [`TaskFlags`] and the two report shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Gym,
    Dsa,
    Ml,
    Django,
    Sql,
    ProjectWork,
    Aws,
}

impl Task {
    pub const ALL: [Task; 7] = [
        Task::Gym,
        Task::Dsa,
        Task::Ml,
        Task::Django,
        Task::Sql,
        Task::ProjectWork,
        Task::Aws,
    ];

    /// Field name on daily entries and form inputs.
    pub fn key(self) -> &'static str {
        match self {
            Task::Gym => "gym",
            Task::Dsa => "dsa",
            Task::Ml => "ml",
            Task::Django => "django",
            Task::Sql => "sql",
            Task::ProjectWork => "project_work",
            Task::Aws => "aws",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Task::Gym => "Gym",
            Task::Dsa => "DSA",
            Task::Ml => "ML",
            Task::Django => "Django",
            Task::Sql => "SQL",
            Task::ProjectWork => "Project Work",
            Task::Aws => "AWS",
        }
    }

    pub fn cadence(self) -> Cadence {
        match self {
            Task::Gym | Task::Dsa | Task::Ml => Cadence::Daily,
            _ => Cadence::Weekly,
        }
    }

    pub fn from_key(key: &str) -> Option<Task> {
        Task::ALL.into_iter().find(|task| task.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFlags {
    pub gym: bool,
    pub dsa: bool,
    pub ml: bool,
    pub django: bool,
    pub sql: bool,
    pub project_work: bool,
    pub aws: bool,
}

impl TaskFlags {
    pub fn get(&self, task: Task) -> bool {
        match task {
            Task::Gym => self.gym,
            Task::Dsa => self.dsa,
            Task::Ml => self.ml,
            Task::Django => self.django,
            Task::Sql => self.sql,
            Task::ProjectWork => self.project_work,
            Task::Aws => self.aws,
        }
    }

    pub fn set(&mut self, task: Task, done: bool) {
        let slot = match task {
            Task::Gym => &mut self.gym,
            Task::Dsa => &mut self.dsa,
            Task::Ml => &mut self.ml,
            Task::Django => &mut self.django,
            Task::Sql => &mut self.sql,
            Task::ProjectWork => &mut self.project_work,
            Task::Aws => &mut self.aws,
        };
        *slot = done;
    }

    pub fn completed(&self) -> impl Iterator<Item = Task> + '_ {
        Task::ALL.into_iter().filter(|task| self.get(*task))
    }

    /// Builds flags from checked form keys; unknown keys are ignored.
    pub fn from_checked<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = TaskFlags::default();
        for task in keys.into_iter().filter_map(Task::from_key) {
            flags.set(task, true);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for task in Task::ALL {
            assert_eq!(Task::from_key(task.key()), Some(task));
        }
        assert_eq!(Task::from_key("yoga"), None);
    }

    #[test]
    fn set_and_get_touch_only_one_flag() {
        let mut flags = TaskFlags::default();
        flags.set(Task::ProjectWork, true);
        assert!(flags.project_work);
        assert_eq!(flags.completed().collect::<Vec<_>>(), vec![Task::ProjectWork]);
    }

    #[test]
    fn from_checked_skips_unknown_keys() {
        let flags = TaskFlags::from_checked(["gym", "date", "aws"]);
        assert!(flags.gym && flags.aws);
        assert_eq!(flags.completed().count(), 2);
    }

    #[test]
    fn missing_flags_default_to_false() {
        let flags: TaskFlags = serde_json::from_str(r#"{"dsa": true}"#).unwrap();
        assert!(flags.dsa);
        assert!(!flags.gym);
    }
}
