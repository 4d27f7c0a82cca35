use crate::cli::{TaskAction, TaskCreateArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use crate::validation;
use taskdeck_domain::{Capability, TaskFields};

pub async fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Create(args) => {
            let owner = ctx.require_user()?;
            let (status, priority, due_date) = validate_create(&args)?;

            let task = ctx
                .create_task
                .execute(
                    owner,
                    args.title,
                    args.description,
                    status,
                    priority,
                    due_date,
                )
                .await?;
            output::output_success(&task);
        }
        TaskAction::List => {
            let owner = ctx.require_user()?;
            let tasks = ctx.repo.list_for_owner(owner).await?;
            output::output_list(tasks);
        }
        TaskAction::Show { id } => {
            let task = ctx.authorize(id, Capability::View).await?;
            output::output_success(&task);
        }
        TaskAction::Update(args) => {
            let task = ctx.authorize(args.id, Capability::Update).await?;
            let fields = validate_update(&args)?;

            let updated = ctx.update_task.execute(&task, fields).await?;
            output::output_success(&updated);
        }
        TaskAction::Status { id, status } => {
            let task = ctx.authorize(id, Capability::Update).await?;
            let status = validation::parse_status(&status)?;

            let updated = ctx.update_task_status.execute(&task, status).await?;
            output::output_success(&updated);
        }
        TaskAction::Delete { id } => {
            let task = ctx.authorize(id, Capability::Delete).await?;
            let deleted = ctx.delete_task.execute(&task).await?;

            if !deleted {
                return output::output_error(&format!("Task not found: {}", id));
            }
            output::output_success(serde_json::json!({ "deleted": id.to_string() }));
        }
    }

    Ok(())
}

fn validate_create(
    args: &TaskCreateArgs,
) -> anyhow::Result<(
    taskdeck_domain::TaskStatus,
    taskdeck_domain::TaskPriority,
    Option<chrono::NaiveDate>,
)> {
    validation::validate_title(&args.title)?;
    let status = validation::parse_status(&args.status)?;
    let priority = validation::parse_priority(&args.priority)?;
    let due_date = args
        .due_date
        .as_deref()
        .map(validation::parse_due_date)
        .transpose()?;
    Ok((status, priority, due_date))
}

fn validate_update(args: &TaskUpdateArgs) -> anyhow::Result<TaskFields> {
    validation::validate_title(&args.title)?;
    Ok(TaskFields {
        title: args.title.clone(),
        description: args.description.clone(),
        status: validation::parse_status(&args.status)?,
        priority: validation::parse_priority(&args.priority)?,
        due_date: args
            .due_date
            .as_deref()
            .map(validation::parse_due_date)
            .transpose()?,
    })
}
