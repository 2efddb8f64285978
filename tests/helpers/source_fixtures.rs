//! Common model sources for tests.

/// A full model file: MODEL block, one SELECT, and a post-statement.
pub const ACTIVE_DEVELOPERS_MODEL: &str = r#"
/* Serves as a silver table for IDP active developers. */
MODEL (
    name "silver"."active_developers",
    kind VIEW,
    owner 'PL',
    tags array[silver, active_developers, idp],
    grains (active_developer_id, concat(account_id, project_id, user_id)),
    audits array[not_null(columns := array[account_id, user_id]), unique_values(columns := array[active_developer_id])],
    enabled @feature_flag('MODULE_IDP')
);

SELECT
    @generate_surrogate_key(
        account_id,
        project_id,
        user_id
    ) AS active_developer_id,
    account_id,
    org_id,
    project_id,
    user_id,
    created_time,
    last_updated_time,
    last_accessed_time,
    email, /* The hashed email of the developer */
    user_name, /* The username of the developer */
    is_deleted
FROM "staging"."platform-harness-idp-activeDevelopers";

VACUUM @this_model;
"#;

/// What [`ACTIVE_DEVELOPERS_MODEL`] renders to.
pub const ACTIVE_DEVELOPERS_RENDERED: &str = r#"SELECT
    generate_surrogate_key('PLACEHOLDER') AS active_developer_id,
    account_id,
    org_id,
    project_id,
    user_id,
    created_time,
    last_updated_time,
    last_accessed_time,
    email, /* The hashed email of the developer */
    user_name, /* The username of the developer */
    is_deleted
FROM "staging"."platform-harness-idp-activeDevelopers""#;

pub const INCREMENTAL_MODEL: &str = r#"MODEL (
  name analytics.orders,
  kind INCREMENTAL_BY_TIME_RANGE (time_column order_date)
);

SELECT
  order_id,
  @convert_currency(amount, 'USD', @target_currency) AS amount_usd,
  order_date
FROM raw.orders
WHERE order_date BETWEEN @start_ds AND @end_ds
"#;

pub const INCREMENTAL_RENDERED: &str = r#"SELECT
  order_id,
  convert_currency('PLACEHOLDER') AS amount_usd,
  order_date
FROM raw.orders
WHERE order_date BETWEEN start_ds AND end_ds
"#;
