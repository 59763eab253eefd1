use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ReportSysError, Result};
use crate::models::users::{
    entities::{User, UserRole},
    requests::{CreateUserRequest, StudentFilter},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(req.id),
            username: Set(req.username),
            display_name: Set(req.display_name),
            role: Set(req.role.to_string()),
            year: Set(req.year),
            class_label: Set(req.class_label),
            group_label: Set(req.group_label),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 按筛选条件列出学生，未给出的条件不参与过滤
    pub async fn find_students_impl(&self, filter: StudentFilter) -> Result<Vec<User>> {
        let mut select = Users::find().filter(Column::Role.eq(UserRole::STUDENT));

        if let Some(student_id) = filter.student_id {
            select = select.filter(Column::Id.eq(student_id));
        }

        if let Some(year) = filter.year {
            select = select.filter(Column::Year.eq(year));
        }

        if let Some(class_label) = filter.class_label {
            select = select.filter(Column::ClassLabel.eq(class_label));
        }

        if let Some(group_label) = filter.group_label {
            select = select.filter(Column::GroupLabel.eq(group_label));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_user()).collect())
    }
}
