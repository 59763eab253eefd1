use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（学号即主键，由教务目录分配，不自增）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Year).integer().null())
                    .col(ColumnDef::new(Users::ClassLabel).string().null())
                    .col(ColumnDef::new(Users::GroupLabel).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建报告任务表
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::Seq).big_integer().not_null())
                    .col(ColumnDef::new(Reports::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Reports::Title).string().not_null())
                    .col(ColumnDef::new(Reports::Content).text().not_null())
                    .col(ColumnDef::new(Reports::Year).integer().not_null())
                    .col(ColumnDef::new(Reports::BeginAt).big_integer().not_null())
                    .col(ColumnDef::new(Reports::EndAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建提交记录表
        manager
            .create_table(
                Table::create()
                    .table(ReportSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReportSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReportSubmissions::ReportId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReportSubmissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReportSubmissions::ReportFile).string().null())
                    .col(ColumnDef::new(ReportSubmissions::CodeFile).string().null())
                    .col(
                        ColumnDef::new(ReportSubmissions::UploadedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReportSubmissions::Table, ReportSubmissions::ReportId)
                            .to(Reports::Table, Reports::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReportSubmissions::Table, ReportSubmissions::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 每个 (报告, 学生) 至多一条提交记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_report_submissions_report_student")
                    .table(ReportSubmissions::Table)
                    .col(ReportSubmissions::ReportId)
                    .col(ReportSubmissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_report_submissions_report_id")
                    .table(ReportSubmissions::Table)
                    .col(ReportSubmissions::ReportId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reports_seq")
                    .table(Reports::Table)
                    .col(Reports::Seq)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(ReportSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    DisplayName,
    Role,
    Year,
    ClassLabel,
    GroupLabel,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    Seq,
    CourseId,
    Title,
    Content,
    Year,
    BeginAt,
    EndAt,
}

#[derive(DeriveIden)]
enum ReportSubmissions {
    Table,
    Id,
    ReportId,
    StudentId,
    ReportFile,
    CodeFile,
    UploadedAt,
}
