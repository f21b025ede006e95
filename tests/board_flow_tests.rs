mod common;

use common::{api_for, setup_mock_server, task_json};
use kanban_board_ui::core::models::{Task, TaskStatus};
use kanban_board_ui::features::kanban::services::{
    apply_drag_end, delete_with_confirmation, persist_move, DeleteOutcome, DELETE_CONFIRMATION,
};
use kanban_board_ui::features::kanban::{BoardState, DragEnd};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn board_from(values: Vec<serde_json::Value>) -> BoardState {
    let tasks: Vec<Task> = values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap())
        .collect();
    BoardState::new(tasks)
}

#[tokio::test]
async fn drop_moves_card_before_the_request_completes() {
    let server = setup_mock_server().await;
    Mock::given(method("PATCH"))
        .and(path("/tarefa/1/"))
        .and(body_json(json!({ "status": "Pronto" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(1, "Pronto")))
        .expect(1)
        .mount(&server)
        .await;

    let mut board = board_from(vec![task_json(1, "A fazer"), task_json(2, "A fazer")]);
    let end = DragEnd {
        active: Some(1),
        over: Some(TaskStatus::Done),
    };

    let status_move = apply_drag_end(&mut board, &end).unwrap();

    // Visible locally while the PATCH is still outstanding
    assert_eq!(board.count(&TaskStatus::ToDo), 1);
    assert_eq!(board.column(&TaskStatus::Done)[0].id, 1);
    assert!(board.is_pending(1));

    persist_move(&api_for(&server), &status_move).await.unwrap();
    board.commit(&status_move);

    assert!(!board.is_pending(1));
    assert_eq!(board.task(1).unwrap().status, TaskStatus::Done);
}

#[tokio::test]
async fn rejected_move_is_rolled_back() {
    let server = setup_mock_server().await;
    Mock::given(method("PATCH"))
        .and(path("/tarefa/2/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut board = board_from(vec![task_json(2, "Fazendo")]);
    let end = DragEnd {
        active: Some(2),
        over: Some(TaskStatus::ToDo),
    };
    let status_move = apply_drag_end(&mut board, &end).unwrap();
    assert_eq!(board.task(2).unwrap().status, TaskStatus::ToDo);

    let result = persist_move(&api_for(&server), &status_move).await;

    assert!(result.is_err());
    assert!(board.rollback(&status_move));
    assert_eq!(board.task(2).unwrap().status, TaskStatus::Doing);
    assert!(!board.is_pending(2));
}

#[tokio::test]
async fn drop_outside_a_column_sends_nothing() {
    let server = setup_mock_server().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut board = board_from(vec![task_json(1, "A fazer")]);
    let outside = DragEnd {
        active: Some(1),
        over: None,
    };
    let same_column = DragEnd {
        active: Some(1),
        over: Some(TaskStatus::ToDo),
    };

    assert!(apply_drag_end(&mut board, &outside).is_none());
    assert!(apply_drag_end(&mut board, &same_column).is_none());
    assert_eq!(board.task(1).unwrap().status, TaskStatus::ToDo);
}

#[tokio::test]
async fn declined_confirmation_issues_no_delete() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut asked = None;
    let outcome = delete_with_confirmation(&api_for(&server), 3, |message| {
        asked = Some(message.to_string());
        false
    })
    .await
    .unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(asked.as_deref(), Some(DELETE_CONFIRMATION));
}

#[tokio::test]
async fn accepted_confirmation_deletes_the_task() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/tarefa/3/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = delete_with_confirmation(&api_for(&server), 3, |_| true).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
}

#[tokio::test]
async fn failed_delete_is_reported() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/tarefa/3/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = delete_with_confirmation(&api_for(&server), 3, |_| true).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn refetch_keeps_unsettled_moves() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/tarefa/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            task_json(1, "A fazer"),
            task_json(4, "Fazendo"),
        ])))
        .mount(&server)
        .await;

    let mut board = board_from(vec![task_json(1, "A fazer"), task_json(2, "Pronto")]);
    let end = DragEnd {
        active: Some(1),
        over: Some(TaskStatus::Doing),
    };
    apply_drag_end(&mut board, &end).unwrap();

    let fresh = api_for(&server).list_tasks().await.unwrap();
    board.merge_from_server(fresh);

    assert_eq!(board.task(1).unwrap().status, TaskStatus::Doing);
    assert!(board.task(2).is_none());
    assert_eq!(board.count(&TaskStatus::Doing), 2);
}
