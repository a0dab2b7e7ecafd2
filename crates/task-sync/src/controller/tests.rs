//! Controller Tests
//!
//! Runs every operation against an in-memory task service, a scripted
//! notifier and a view that records what it was asked to show.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use super::*;
use crate::model::Priority;
use crate::render::Placeholder;

// ========================
// Test doubles
// ========================

#[derive(Default)]
struct FakeApi {
    server: RefCell<Vec<Task>>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<String>>,
    created: RefCell<Vec<NewTask>>,
    updates: RefCell<Vec<(TaskId, TaskUpdate)>>,
    fail_list: Cell<bool>,
    fail_writes: Cell<bool>,
    fail_delete_of: RefCell<Vec<TaskId>>,
}

impl FakeApi {
    fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Number(n) => Some(n),
                TaskId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        let api = Self::default();
        *api.server.borrow_mut() = tasks;
        api.next_id.set(next_id);
        api
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn server_error() -> SyncError {
        SyncError::Request { status: 500, status_text: "Internal Server Error".into() }
    }

    fn not_found() -> SyncError {
        SyncError::Request { status: 404, status_text: "Not Found".into() }
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list(&self) -> Result<Vec<Task>> {
        self.log("GET".into());
        if self.fail_list.get() {
            return Err(SyncError::Network("connection refused".into()));
        }
        Ok(self.server.borrow().clone())
    }

    async fn create(&self, task: &NewTask) -> Result<Task> {
        self.log("POST".into());
        self.created.borrow_mut().push(task.clone());
        if self.fail_writes.get() {
            return Err(Self::server_error());
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Task {
            id: TaskId::Number(id),
            title: task.title.clone(),
            description: task.description.clone(),
            completed: false,
            priority: task.priority,
            created_at: Some("2024-05-01 10:00:00".into()),
            updated_at: None,
        };
        self.server.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    async fn toggle(&self, id: &TaskId) -> Result<Task> {
        self.log(format!("PATCH {}", id));
        if self.fail_writes.get() {
            return Err(Self::server_error());
        }
        let mut server = self.server.borrow_mut();
        let task = server.iter_mut().find(|t| &t.id == id).ok_or_else(Self::not_found)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    async fn update(&self, id: &TaskId, update: &TaskUpdate) -> Result<Task> {
        self.log(format!("PUT {}", id));
        self.updates.borrow_mut().push((id.clone(), update.clone()));
        if self.fail_writes.get() {
            return Err(Self::server_error());
        }
        let mut server = self.server.borrow_mut();
        let task = server.iter_mut().find(|t| &t.id == id).ok_or_else(Self::not_found)?;
        task.title = update.title.clone();
        task.description = update.description.clone();
        task.completed = update.completed;
        task.priority = update.priority;
        task.updated_at = Some("2024-05-02 08:00:00".into());
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        self.log(format!("DELETE {}", id));
        if self.fail_writes.get() || self.fail_delete_of.borrow().contains(id) {
            return Err(Self::server_error());
        }
        let mut server = self.server.borrow_mut();
        let before = server.len();
        server.retain(|t| &t.id != id);
        if server.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

#[derive(Default)]
struct ScriptedNotifier {
    confirms: RefCell<VecDeque<bool>>,
    prompts: RefCell<VecDeque<Option<String>>>,
    alerts: RefCell<Vec<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedNotifier {
    fn answer_confirm(&self, answer: bool) {
        self.confirms.borrow_mut().push_back(answer);
    }

    fn answer_prompt(&self, answer: Option<&str>) {
        self.prompts.borrow_mut().push_back(answer.map(str::to_string));
    }
}

impl Notifier for ScriptedNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.confirms.borrow_mut().pop_front().unwrap_or(true)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.asked.borrow_mut().push(format!("{} [{}]", message, default));
        self.prompts.borrow_mut().pop_front().flatten()
    }
}

#[derive(Default)]
struct RecordingView {
    renders: RefCell<Vec<ListView>>,
    cleared: Cell<usize>,
}

impl RecordingView {
    fn last(&self) -> ListView {
        self.renders.borrow().last().cloned().expect("nothing rendered yet")
    }

    fn count(&self) -> usize {
        self.renders.borrow().len()
    }
}

impl TaskView for RecordingView {
    fn render(&self, view: &ListView) {
        self.renders.borrow_mut().push(view.clone());
    }

    fn clear_inputs(&self) {
        self.cleared.set(self.cleared.get() + 1);
    }
}

type TestController = TaskListController<FakeApi, ScriptedNotifier, RecordingView>;

fn make_task(id: i64, title: &str, completed: bool) -> Task {
    Task {
        id: TaskId::Number(id),
        title: title.to_string(),
        description: String::new(),
        completed,
        priority: Priority::Media,
        created_at: None,
        updated_at: None,
    }
}

async fn loaded(tasks: Vec<Task>) -> TestController {
    let mut controller = TaskListController::new(
        FakeApi::with_tasks(tasks),
        ScriptedNotifier::default(),
        RecordingView::default(),
    );
    controller.load().await.expect("initial load");
    controller.api().calls.borrow_mut().clear();
    controller
}

fn calls(controller: &TestController) -> Vec<String> {
    controller.api().calls.borrow().clone()
}

fn id(n: i64) -> TaskId {
    TaskId::Number(n)
}

// ========================
// Load
// ========================

#[tokio::test]
async fn test_load_replaces_collection() {
    let controller = loaded(vec![make_task(2, "b", false), make_task(1, "a", true)]).await;

    assert_eq!(controller.tasks().ids(), vec![id(2), id(1)]);
    assert_eq!(controller.view().count(), 1);
    assert_eq!(controller.view().last().rows().len(), 2);
}

#[tokio::test]
async fn test_load_failure_falls_back_to_empty() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.api().fail_list.set(true);

    let result = controller.load().await;

    assert!(matches!(result, Err(SyncError::Network(_))));
    assert!(controller.tasks().is_empty());
    assert_eq!(controller.view().last().placeholder(), Some(&Placeholder::NoTasksYet));
    let alerts = controller.notifier().alerts.borrow().clone();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Erro ao conectar com o servidor"));
}

#[tokio::test]
async fn test_load_keeps_task_with_null_priority() {
    let legacy: Task = serde_json::from_value(serde_json::json!({
        "id": 5,
        "titulo": "sem prioridade",
        "descricao": null,
        "completo": false,
        "prioridade": null
    }))
    .expect("null priority should parse");
    let controller = loaded(vec![legacy, make_task(4, "d", false)]).await;

    assert_eq!(controller.tasks().ids(), vec![id(5), id(4)]);
    assert_eq!(controller.tasks().get(&id(5)).map(|t| t.priority), Some(Priority::Media));
    assert_eq!(controller.view().last().rows()[0].title, "sem prioridade");
}

#[tokio::test]
async fn test_reload_matches_last_server_answers() {
    let mut controller = loaded(vec![make_task(1, "a", false), make_task(2, "b", false)]).await;
    controller.add("c", "").await.expect("add");
    controller.toggle(&id(1)).await.expect("toggle");
    controller.notifier().answer_confirm(true);
    controller.delete(&id(2)).await.expect("delete");
    let before = controller.current_view();

    controller.load().await.expect("reload");

    assert_eq!(controller.current_view(), before);
}

// ========================
// Add
// ========================

#[tokio::test]
async fn test_add_prepends_created_task() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;

    let created = controller.add("  Buy milk ", "").await.expect("add");

    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);
    assert_eq!(created.priority, Priority::Media);
    assert_eq!(
        controller.api().created.borrow().clone(),
        vec![NewTask { title: "Buy milk".into(), description: String::new(), priority: Priority::Media }]
    );
    assert_eq!(controller.tasks().len(), 2);

    let view = controller.view().last();
    let first = &view.rows()[0];
    assert_eq!(first.title, "Buy milk");
    assert!(!first.completed);
    assert_eq!(controller.view().cleared.get(), 1);
}

#[tokio::test]
async fn test_add_blank_title_makes_no_request() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    let renders = controller.view().count();

    for blank in ["", "   ", "\t\n"] {
        let result = controller.add(blank, "some description").await;
        assert!(matches!(result, Err(SyncError::Validation(_))));
    }

    assert!(calls(&controller).is_empty());
    assert_eq!(controller.tasks().ids(), vec![id(1)]);
    assert_eq!(controller.view().count(), renders);
    assert_eq!(controller.view().cleared.get(), 0);
    assert_eq!(controller.notifier().alerts.borrow()[0], EMPTY_TITLE_ON_ADD);
}

#[tokio::test]
async fn test_add_failure_leaves_collection() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.api().fail_writes.set(true);

    let result = controller.add("new", "").await;

    assert_eq!(result, Err(FakeApi::server_error()));
    assert_eq!(controller.tasks().ids(), vec![id(1)]);
    assert_eq!(controller.view().cleared.get(), 0);
    assert_eq!(controller.notifier().alerts.borrow().len(), 1);
}

// ========================
// Toggle
// ========================

#[tokio::test]
async fn test_toggle_replaces_only_target() {
    let mut controller = loaded(vec![
        make_task(1, "a", false),
        make_task(2, "b", false),
        make_task(3, "c", true),
    ])
    .await;
    let before = controller.tasks().clone();

    let updated = controller.toggle(&id(2)).await.expect("toggle");

    assert!(updated.completed);
    assert_eq!(calls(&controller), vec!["PATCH 2"]);
    assert_eq!(controller.tasks().ids(), before.ids());
    assert_eq!(controller.tasks().get(&id(1)), before.get(&id(1)));
    assert_eq!(controller.tasks().get(&id(3)), before.get(&id(3)));

    let view = controller.view().last();
    let row = view.find_row("2").expect("row for toggled task");
    assert!(row.completed);
    assert_eq!(row.class(), "task-item completed");
}

#[tokio::test]
async fn test_toggle_unknown_task_makes_no_request() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;

    let result = controller.toggle(&id(99)).await;

    assert_eq!(result, Err(SyncError::UnknownTask(id(99))));
    assert!(calls(&controller).is_empty());
    assert!(controller.notifier().alerts.borrow().is_empty());
}

#[tokio::test]
async fn test_toggle_failure_keeps_task() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.api().fail_writes.set(true);

    assert!(controller.toggle(&id(1)).await.is_err());
    assert!(!controller.tasks().get(&id(1)).unwrap().completed);
}

// ========================
// Edit
// ========================

#[tokio::test]
async fn test_edit_sends_full_representation() {
    let mut done = make_task(1, "old", true);
    done.priority = Priority::Alta;
    done.description = "old desc".into();
    let mut controller = loaded(vec![done, make_task(2, "other", false)]).await;
    controller.notifier().answer_prompt(Some("  New title "));
    controller.notifier().answer_prompt(Some(" new desc "));

    let updated = controller.edit(&id(1)).await.expect("edit").expect("not cancelled");

    assert_eq!(updated.title, "New title");
    assert_eq!(
        controller.api().updates.borrow().clone(),
        vec![(
            id(1),
            TaskUpdate {
                title: "New title".into(),
                description: "new desc".into(),
                completed: true,
                priority: Priority::Alta,
            }
        )]
    );
    assert_eq!(
        controller.notifier().asked.borrow().clone(),
        vec![
            format!("{} [old]", EDIT_TITLE_PROMPT),
            format!("{} [old desc]", EDIT_DESCRIPTION_PROMPT),
        ]
    );
    assert_eq!(controller.tasks().ids(), vec![id(1), id(2)]);
    assert_eq!(controller.view().last().rows()[0].description.as_deref(), Some("new desc"));
}

#[tokio::test]
async fn test_edit_cancelled_makes_no_request() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;

    controller.notifier().answer_prompt(None);
    assert_eq!(controller.edit(&id(1)).await, Ok(None));

    controller.notifier().answer_prompt(Some("changed"));
    controller.notifier().answer_prompt(None);
    assert_eq!(controller.edit(&id(1)).await, Ok(None));

    assert!(calls(&controller).is_empty());
    assert_eq!(controller.tasks().get(&id(1)).unwrap().title, "a");
    assert!(controller.notifier().alerts.borrow().is_empty());
}

#[tokio::test]
async fn test_edit_blank_title_rejected() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.notifier().answer_prompt(Some("   "));

    let result = controller.edit(&id(1)).await;

    assert_eq!(result, Err(SyncError::validation(EMPTY_TITLE_ON_EDIT)));
    assert!(calls(&controller).is_empty());
    assert_eq!(controller.notifier().alerts.borrow().clone(), vec![EMPTY_TITLE_ON_EDIT]);
    // description prompt never shown
    assert_eq!(controller.notifier().asked.borrow().len(), 1);
}

// ========================
// Delete
// ========================

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let mut controller = loaded(vec![
        make_task(1, "a", false),
        make_task(2, "b", true),
        make_task(3, "c", false),
    ])
    .await;

    assert_eq!(controller.delete(&id(2)).await, Ok(true));

    assert_eq!(calls(&controller), vec!["DELETE 2"]);
    assert_eq!(controller.tasks().ids(), vec![id(1), id(3)]);
    assert_eq!(controller.notifier().asked.borrow().clone(), vec![CONFIRM_DELETE]);
}

#[tokio::test]
async fn test_delete_declined_changes_nothing() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.notifier().answer_confirm(false);

    assert_eq!(controller.delete(&id(1)).await, Ok(false));

    assert!(calls(&controller).is_empty());
    assert_eq!(controller.tasks().ids(), vec![id(1)]);
    assert_eq!(controller.api().server.borrow().len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_task_asks_nothing() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;

    let result = controller.delete(&id(9)).await;

    assert_eq!(result, Err(SyncError::UnknownTask(id(9))));
    assert!(controller.notifier().asked.borrow().is_empty());
    assert!(controller.notifier().alerts.borrow().is_empty());
    assert!(calls(&controller).is_empty());
}

#[tokio::test]
async fn test_delete_failure_keeps_task() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.api().fail_writes.set(true);

    assert!(controller.delete(&id(1)).await.is_err());
    assert_eq!(controller.tasks().ids(), vec![id(1)]);
}

// ========================
// Clear all
// ========================

#[tokio::test]
async fn test_clear_all_deletes_in_order() {
    let mut controller = loaded(vec![
        make_task(3, "c", false),
        make_task(1, "a", true),
        make_task(2, "b", false),
    ])
    .await;

    let report = controller.clear_all().await.expect("confirmed");

    assert!(report.is_complete());
    assert_eq!(report.deleted, vec![id(3), id(1), id(2)]);
    assert_eq!(calls(&controller), vec!["DELETE 3", "DELETE 1", "DELETE 2"]);
    assert!(controller.tasks().is_empty());
    assert_eq!(controller.view().last().placeholder(), Some(&Placeholder::NoTasksYet));
    assert!(controller.notifier().alerts.borrow().is_empty());
}

#[tokio::test]
async fn test_clear_all_partial_failure_keeps_survivors() {
    let mut controller = loaded(vec![
        make_task(1, "a", false),
        make_task(2, "b", false),
        make_task(3, "c", false),
    ])
    .await;
    controller.api().fail_delete_of.borrow_mut().push(id(2));

    let report = controller.clear_all().await.expect("confirmed");

    // the run continues past the failure
    assert_eq!(calls(&controller), vec!["DELETE 1", "DELETE 2", "DELETE 3"]);
    assert_eq!(report.deleted, vec![id(1), id(3)]);
    assert_eq!(report.failed, vec![(id(2), FakeApi::server_error())]);
    assert_eq!(controller.tasks().ids(), vec![id(2)]);
    assert_eq!(controller.tasks().ids(), controller.api().server.borrow().iter().map(|t| t.id.clone()).collect::<Vec<_>>());

    let alerts = controller.notifier().alerts.borrow().clone();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("1 de 3 tarefas"));
}

#[tokio::test]
async fn test_clear_all_declined() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.notifier().answer_confirm(false);

    assert_eq!(controller.clear_all().await, None);
    assert!(calls(&controller).is_empty());
    assert_eq!(controller.tasks().len(), 1);
}

// ========================
// Filter and dispatch
// ========================

#[tokio::test]
async fn test_set_filter_rerenders_without_requests() {
    let mut controller = loaded(vec![make_task(1, "a", false), make_task(2, "b", true)]).await;

    controller.set_filter(Filter::Completed);
    let view = controller.view().last();
    assert_eq!(view.filter, Filter::Completed);
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].id, id(2));

    controller.set_filter(Filter::All);
    assert_eq!(controller.view().last().rows().len(), 2);
    assert!(calls(&controller).is_empty());
}

#[tokio::test]
async fn test_filter_placeholder_after_toggle() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;
    controller.set_filter(Filter::Pending);

    controller.toggle(&id(1)).await.expect("toggle");

    assert_eq!(
        controller.view().last().placeholder(),
        Some(&Placeholder::NoneMatching(Filter::Pending))
    );
}

#[tokio::test]
async fn test_dispatch_runs_one_operation_per_command() {
    let mut controller = loaded(vec![make_task(1, "a", false)]).await;

    controller
        .dispatch(Command::Add { title: "b".into(), description: "d".into() })
        .await
        .expect("add");
    controller
        .dispatch(Command::Item(id(1), ItemAction::Toggle))
        .await
        .expect("toggle");
    controller.notifier().answer_prompt(Some("a2"));
    controller.notifier().answer_prompt(Some(""));
    controller
        .dispatch(Command::Item(id(1), ItemAction::Edit))
        .await
        .expect("edit");
    controller.dispatch(Command::SetFilter(Filter::Pending)).await.expect("filter");
    controller
        .dispatch(Command::Item(id(2), ItemAction::Delete))
        .await
        .expect("delete");
    controller.dispatch(Command::Load).await.expect("load");

    assert_eq!(
        calls(&controller),
        vec!["POST", "PATCH 1", "PUT 1", "DELETE 2", "GET"]
    );
    assert_eq!(controller.filter(), Filter::Pending);
    assert_eq!(controller.tasks().ids(), vec![id(1)]);
}

#[tokio::test]
async fn test_dispatch_clear_all_reports_first_failure() {
    let mut controller = loaded(vec![make_task(1, "a", false), make_task(2, "b", false)]).await;
    controller.api().fail_delete_of.borrow_mut().push(id(1));

    let result = controller.dispatch(Command::ClearAll).await;

    assert_eq!(result, Err(FakeApi::server_error()));
    assert_eq!(controller.tasks().ids(), vec![id(1)]);
}
