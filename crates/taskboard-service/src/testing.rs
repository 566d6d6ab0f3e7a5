//! Shared fixtures for service tests.

use std::sync::Arc;

use uuid::Uuid;

use taskboard_database::memory::MemoryStores;
use taskboard_database::{ProjectStore, TaskStore, UserStore};
use taskboard_entity::board::{Board, Column};
use taskboard_entity::project::{CreateProject, Project};
use taskboard_entity::task::{CreateTask, Task, TaskPriority};
use taskboard_entity::user::{CreateUser, UserRole};

use crate::context::RequestContext;
use crate::{
    BoardService, CommentService, LabelService, OwnershipResolver, ProjectService, TaskService,
    UserService,
};

pub(crate) struct Fixture {
    pub stores: MemoryStores,
    pub resolver: Arc<OwnershipResolver>,
}

/// A project with its default columns and one task in the first column.
pub(crate) struct Seeded {
    pub project: Project,
    pub board: Board,
    pub columns: Vec<Column>,
    pub task: Task,
}

impl Fixture {
    pub fn new() -> Self {
        let stores = MemoryStores::new();
        let resolver = Arc::new(OwnershipResolver::new(
            stores.projects.clone(),
            stores.boards.clone(),
            stores.columns.clone(),
            stores.tasks.clone(),
            stores.labels.clone(),
        ));
        Self { stores, resolver }
    }

    pub async fn user(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.stores
            .users
            .create(&CreateUser {
                email: format!("{id}@example.com"),
                display_name: "Tester".into(),
                password_hash: "unused".into(),
                role: UserRole::Member,
            })
            .await
            .unwrap()
            .id
    }

    pub async fn context(&self) -> RequestContext {
        let user_id = self.user().await;
        let user = self.stores.users.find_by_id(user_id).await.unwrap().unwrap();
        RequestContext::new(user.id, user.email, user.role)
    }

    pub async fn project_with_task(&self, owner: Uuid) -> Seeded {
        let created = self
            .stores
            .projects
            .create_with_board(
                &CreateProject {
                    name: "Seeded".into(),
                    description: String::new(),
                    owner_id: owner,
                },
                "Main Board",
                &[
                    ("To Do".to_string(), 1000.0),
                    ("In Progress".to_string(), 2000.0),
                    ("Done".to_string(), 3000.0),
                ],
            )
            .await
            .unwrap();

        let task = self
            .stores
            .tasks
            .create(&CreateTask {
                column_id: created.columns[0].id,
                title: "First".into(),
                description: String::new(),
                priority: TaskPriority::Medium,
                assignee_id: None,
                position: 1000.0,
            })
            .await
            .unwrap();

        Seeded {
            project: created.project,
            board: created.board,
            columns: created.columns,
            task,
        }
    }

    pub fn project_service(&self) -> ProjectService {
        ProjectService::new(self.stores.projects.clone(), self.resolver.clone())
    }

    pub fn board_service(&self) -> BoardService {
        BoardService::new(
            self.stores.boards.clone(),
            self.stores.columns.clone(),
            self.resolver.clone(),
        )
    }

    pub fn task_service(&self) -> TaskService {
        TaskService::new(
            self.stores.tasks.clone(),
            self.stores.columns.clone(),
            self.stores.users.clone(),
            self.resolver.clone(),
        )
    }

    pub fn label_service(&self) -> LabelService {
        LabelService::new(self.stores.labels.clone(), self.resolver.clone())
    }

    pub fn comment_service(&self) -> CommentService {
        CommentService::new(self.stores.comments.clone(), self.resolver.clone())
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.stores.users.clone())
    }
}
