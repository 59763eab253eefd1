//! 预导入模块，方便使用

pub use super::report_submissions::{
    ActiveModel as ReportSubmissionActiveModel, Entity as ReportSubmissions,
    Model as ReportSubmissionModel,
};
pub use super::reports::{
    ActiveModel as ReportActiveModel, Entity as Reports, Model as ReportModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
