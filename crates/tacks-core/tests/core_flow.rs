use tacks_core::filter::{
    StatusFilter, TaskFilter, visible_tasks,
};
use tacks_core::task::{Category, CreateTask, Priority, Task, TaskDraft};
use tacks_core::validate::validate_new_task;

#[test]
fn draft_to_record_to_filtered_view() {
    let draft = TaskDraft {
        title: "Renew passport".to_string(),
        description: "Book an appointment and gather the paperwork".to_string(),
        category: Category::Personal,
        priority: Priority::High,
        due_date: "2026-09-01".to_string(),
    };
    validate_new_task(&draft).expect("draft should validate");

    let record = CreateTask::from_draft(draft, "user-42");
    assert!(!record.completed);
    assert_eq!(record.owner_id, "user-42");

    // The database echoes the record back through a snapshot, with its
    // assigned identifier, in the same camelCase shape it was written.
    let written = serde_json::to_value(&record).expect("encode record");
    let mut document = written;
    document["id"] = serde_json::json!("doc-1");
    let task: Task = serde_json::from_value(document).expect("decode snapshot doc");

    assert_eq!(task.id, "doc-1");
    assert_eq!(task.title, "Renew passport");
    assert_eq!(task.owner_id, "user-42");

    let filter = TaskFilter {
        status: StatusFilter::Active,
        category: Some(Category::Personal),
        priority: Some(Priority::High),
        search: String::new(),
    };
    let visible = visible_tasks(std::slice::from_ref(&task), &filter);
    assert_eq!(visible.len(), 1);

    let done_filter = TaskFilter {
        status: StatusFilter::Completed,
        ..TaskFilter::default()
    };
    assert!(visible_tasks(std::slice::from_ref(&task), &done_filter).is_empty());
}
