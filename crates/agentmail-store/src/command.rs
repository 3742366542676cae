//! Argv builders for the tracker's command-line interface.
//!
//! Kept separate from the client so the exact wire form of every
//! invocation can be tested without spawning a process.

use crate::record::{CreateRecord, ListQuery};

/// Arguments for `create`: a new record from a [`CreateRecord`] payload.
#[must_use]
pub fn create(request: &CreateRecord) -> Vec<String> {
    let mut args = vec![
        "create".to_string(),
        request.title.clone(),
        format!("--type={}", request.record_type),
        format!("--assignee={}", request.assignee),
        format!("--actor={}", request.actor),
        format!("--labels={}", request.labels),
        format!("--priority={}", request.priority),
    ];
    if let Some(body) = &request.description {
        args.push("-d".to_string());
        args.push(body.clone());
    }
    args
}

/// Arguments for `list` with JSON output.
#[must_use]
pub fn list(query: &ListQuery) -> Vec<String> {
    vec![
        "list".to_string(),
        format!("--type={}", query.record_type),
        format!("--assignee={}", query.assignee),
        format!("--status={}", query.status),
        "--json".to_string(),
    ]
}

/// Arguments for `show` of a single record with JSON output.
#[must_use]
pub fn show(id: &str) -> Vec<String> {
    vec!["show".to_string(), id.to_string(), "--json".to_string()]
}

/// Arguments for `label add` of a single label to a record.
#[must_use]
pub fn label_add(id: &str, label: &str) -> Vec<String> {
    vec![
        "label".to_string(),
        "add".to_string(),
        id.to_string(),
        label.to_string(),
    ]
}

/// Arguments for `close` of a record.
#[must_use]
pub fn close(id: &str) -> Vec<String> {
    vec!["close".to_string(), id.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateRecord {
        CreateRecord {
            title: "Task".to_string(),
            record_type: "message".to_string(),
            assignee: "worker-1".to_string(),
            actor: "hq".to_string(),
            labels: "from:hq,priority:0".to_string(),
            priority: 0,
            description: Some("Run tests".to_string()),
        }
    }

    #[test]
    fn create_with_description() {
        let args = create(&request());
        assert_eq!(
            args,
            vec![
                "create",
                "Task",
                "--type=message",
                "--assignee=worker-1",
                "--actor=hq",
                "--labels=from:hq,priority:0",
                "--priority=0",
                "-d",
                "Run tests",
            ]
        );
    }

    #[test]
    fn create_without_description_omits_flag() {
        let mut req = request();
        req.description = None;
        let args = create(&req);
        assert!(!args.contains(&"-d".to_string()));
        assert_eq!(args.len(), 7);
    }

    #[test]
    fn list_filters() {
        let args = list(&ListQuery::open_messages("worker-1"));
        assert_eq!(
            args,
            vec![
                "list",
                "--type=message",
                "--assignee=worker-1",
                "--status=open",
                "--json",
            ]
        );
    }

    #[test]
    fn show_is_json() {
        assert_eq!(show("am-42"), vec!["show", "am-42", "--json"]);
    }

    #[test]
    fn label_add_is_positional() {
        assert_eq!(
            label_add("am-42", "read"),
            vec!["label", "add", "am-42", "read"]
        );
    }

    #[test]
    fn close_takes_id() {
        assert_eq!(close("am-42"), vec!["close", "am-42"]);
    }
}
