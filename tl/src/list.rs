//! Ordered task list

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::TaskListError;
use crate::task::Task;

/// Header line printed above every rendered list
pub const HEADER: &str = "---- Today's Todos ----";

/// Shared handle to a task.
///
/// Lists hold handles rather than tasks so a filtered list and its source
/// refer to the same task instances.
pub type TaskRef = Rc<Task>;

/// A titled, ordered collection of tasks.
///
/// Positions are always `0..size()`. Insertion order is kept by every
/// operation except the explicit removals (`pop`, `shift`, `remove_at`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    title: String,
    items: Vec<TaskRef>,
}

impl TaskList {
    /// Create an empty list
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a task (or an existing handle) to the end of the list
    pub fn add(&mut self, task: impl Into<TaskRef>) {
        let task = task.into();
        debug!(list = %self.title, title = %task.title(), "TaskList::add");
        self.items.push(task);
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&TaskRef> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&TaskRef> {
        self.items.last()
    }

    /// Get the task at `index`, failing for any position outside `0..size()`
    pub fn item_at(&self, index: usize) -> Result<&TaskRef, TaskListError> {
        self.items.get(index).ok_or(TaskListError::InvalidIndex {
            index,
            size: self.items.len(),
        })
    }

    pub fn mark_done_at(&self, index: usize) -> Result<(), TaskListError> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&self, index: usize) -> Result<(), TaskListError> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// True when every task is done; an empty list is done
    pub fn is_done(&self) -> bool {
        self.items.iter().all(|task| task.is_done())
    }

    /// Remove and return the last task
    pub fn pop(&mut self) -> Option<TaskRef> {
        let task = self.items.pop();
        debug!(list = %self.title, popped = task.is_some(), "TaskList::pop");
        task
    }

    /// Remove and return the first task
    pub fn shift(&mut self) -> Option<TaskRef> {
        if self.items.is_empty() {
            debug!(list = %self.title, "TaskList::shift: empty");
            return None;
        }
        debug!(list = %self.title, "TaskList::shift");
        Some(self.items.remove(0))
    }

    /// Remove and return the task at `index`; later tasks move down one position
    pub fn remove_at(&mut self, index: usize) -> Result<TaskRef, TaskListError> {
        self.item_at(index)?;
        debug!(list = %self.title, index, "TaskList::remove_at");
        Ok(self.items.remove(index))
    }

    pub fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&TaskRef),
    {
        self.items.iter().for_each(callback);
    }

    /// Build a new list with the same title holding the tasks that match
    /// `predicate`, in order. The tasks are shared, not copied.
    pub fn filter<P>(&self, mut predicate: P) -> TaskList
    where
        P: FnMut(&Task) -> bool,
    {
        let mut filtered = TaskList::new(self.title.clone());
        self.for_each(|task| {
            if predicate(task) {
                filtered.add(Rc::clone(task));
            }
        });
        filtered
    }

    /// First task whose title equals `title` exactly
    pub fn find_by_title(&self, title: &str) -> Option<&TaskRef> {
        self.items.iter().find(|task| task.title() == title)
    }

    pub fn all_done(&self) -> Vec<TaskRef> {
        self.filter(|task| task.is_done()).items
    }

    pub fn all_not_done(&self) -> Vec<TaskRef> {
        self.filter(|task| !task.is_done()).items
    }

    /// Mark the first task titled `title` as done; does nothing if none matches
    pub fn mark_done(&self, title: &str) {
        match self.find_by_title(title) {
            Some(task) => task.mark_done(),
            None => debug!(list = %self.title, %title, "TaskList::mark_done: no match"),
        }
    }

    pub fn mark_all_done(&self) {
        self.for_each(|task| task.mark_done());
    }

    pub fn mark_all_undone(&self) {
        self.for_each(|task| task.mark_undone());
    }

    /// Snapshot of the current handles, in order
    pub fn to_vec(&self) -> Vec<TaskRef> {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRef> {
        self.items.iter()
    }

    /// Render the header followed by one line per task
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRef;
    type IntoIter = std::slice::Iter<'a, TaskRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.items.iter().map(|task| task.render()).collect();
        write!(f, "{}\n{}", HEADER, lines.join("\n"))
    }
}
