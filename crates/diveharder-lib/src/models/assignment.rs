use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::context::Context;
use crate::decode::{decode_list, WireObject};
use crate::enums::{AssignmentType, RewardType, ValueType};
use crate::error::Result;
use crate::task_data::{resolve_task_data, AssignmentTaskData};

/// One objective within an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentTask {
    pub task_type: AssignmentType,
    pub values: Vec<i64>,
    pub value_types: Vec<ValueType>,
    pub data: AssignmentTaskData,
}

impl AssignmentTask {
    pub const ENTITY: &'static str = "AssignmentTask";

    /// Decode a task, resolving planet references through `ctx`.
    pub fn decode(value: &Value, ctx: &Context) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        let values: Vec<i64> = obj.required("values")?;
        let value_types: Vec<ValueType> = obj
            .required::<Vec<i64>>("valueTypes")?
            .into_iter()
            .map(ValueType::from_code)
            .collect();

        if values.len() != value_types.len() {
            return Err(obj.error(
                "valueTypes",
                format!(
                    "length {} does not match values length {}",
                    value_types.len(),
                    values.len()
                ),
            ));
        }

        let data = resolve_task_data(ctx, &value_types, &values)?;
        Ok(Self {
            task_type: AssignmentType::from_code(obj.required("type")?),
            values,
            value_types,
            data,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentReward {
    pub reward_type: RewardType,
    pub amount: i64,
}

impl AssignmentReward {
    fn decode(value: &Value) -> Result<Self> {
        let obj = WireObject::new("AssignmentReward", value)?;
        Ok(Self {
            reward_type: RewardType::from_code(obj.required("type")?),
            amount: obj.required("amount")?,
        })
    }
}

/// Shown by `Display` in place of an absent title or briefing.
const MISSING_TEXT: &str = "None";

/// A major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub id: i64,
    /// Progress per task, positionally aligned with `tasks`. Decoding rejects
    /// a length that differs from `tasks`.
    pub progress: Vec<i64>,
    pub title: Option<String>,
    pub briefing: Option<String>,
    pub description: Option<String>,
    pub tasks: Vec<AssignmentTask>,
    pub reward: AssignmentReward,
    pub expiration: DateTime<Utc>,
}

impl Assignment {
    pub const ENTITY: &'static str = "Assignment";

    /// Decode an assignment, resolving task planet references through `ctx`.
    pub fn decode(value: &Value, ctx: &Context) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        let tasks = decode_list(AssignmentTask::ENTITY, obj.value("tasks")?, |task| {
            AssignmentTask::decode(task, ctx)
        })?;
        let progress: Vec<i64> = obj.required("progress")?;
        if progress.len() != tasks.len() {
            return Err(obj.error(
                "progress",
                format!(
                    "length {} does not match tasks length {}",
                    progress.len(),
                    tasks.len()
                ),
            ));
        }

        Ok(Self {
            id: obj.required("id")?,
            progress,
            title: obj.optional("title")?,
            briefing: obj.optional("briefing")?,
            description: obj.optional("description")?,
            tasks,
            reward: AssignmentReward::decode(obj.value("reward")?)?,
            expiration: obj.timestamp("expiration")?,
        })
    }

    /// [`Assignment::decode`] through the shared context.
    ///
    /// Fails with [`crate::Error::ContextNotInitialized`] when no shared
    /// context exists, whether or not the tasks reference planets.
    pub fn decode_shared(value: &Value) -> Result<Self> {
        let ctx = Context::require()?;
        Self::decode(value, &ctx)
    }

    /// Decode a JSON array of assignments.
    pub fn decode_list(value: &Value, ctx: &Context) -> Result<Vec<Self>> {
        decode_list(Self::ENTITY, value, |item| Self::decode(item, ctx))
    }

    /// `true` when every task's progress equals its target count.
    ///
    /// A task without a target count never counts as complete.
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().enumerate().all(|(index, task)| {
            match (task.data.target_count, self.progress.get(index)) {
                (Some(target), Some(progress)) => target == *progress,
                _ => false,
            }
        })
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.title.as_deref().unwrap_or(MISSING_TEXT),
            self.briefing.as_deref().unwrap_or(MISSING_TEXT)
        )
    }
}
