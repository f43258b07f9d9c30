//! Trino Connection
//! Submits statements over HTTP and follows `nextUri` until they finish.

use super::literal::execute_immediate;
use super::model::QueryResults;
use super::TrinoError;
use crate::config::ConnectionConfig;
use crate::store::{QueryOutput, SqlValue, StatementExecutor};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

const HEADER_USER: &str = "X-Trino-User";
const HEADER_SOURCE: &str = "X-Trino-Source";
const HEADER_CATALOG: &str = "X-Trino-Catalog";
const HEADER_SCHEMA: &str = "X-Trino-Schema";
const HEADER_SET_CATALOG: &str = "X-Trino-Set-Catalog";
const HEADER_SET_SCHEMA: &str = "X-Trino-Set-Schema";

/// Client-side session state. `USE` statements update it through response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    user: String,
    source: String,
    catalog: Option<String>,
    schema: Option<String>,
}

/// A session against one coordinator. Statements run one at a time and are
/// drained to completion before `execute` returns.
pub struct TrinoConnection {
    http: Client,
    statement_url: Url,
    session: Session,
}

impl TrinoConnection {
    /// Prepare a connection. No request is sent until the first statement.
    pub fn connect(config: &ConnectionConfig) -> Result<Self, TrinoError> {
        let statement_url = Url::parse(&config.base_url())?.join("/v1/statement")?;
        let http = Client::builder().build()?;
        tracing::debug!(url = %statement_url, user = %config.user, "opening trino session");
        Ok(Self {
            http,
            statement_url,
            session: Session {
                user: config.user.clone(),
                source: config.source.clone(),
                catalog: Some(config.catalog.clone()),
                schema: config.schema.clone(),
            },
        })
    }

    /// End the session. The protocol keeps no server-side connection, so
    /// this only releases the HTTP client.
    pub fn close(self) {
        tracing::debug!(user = %self.session.user, "closing trino session");
    }

    fn request_headers(&self) -> Result<HeaderMap, TrinoError> {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_USER, header_value(&self.session.user)?);
        headers.insert(HEADER_SOURCE, header_value(&self.session.source)?);
        if let Some(catalog) = &self.session.catalog {
            headers.insert(HEADER_CATALOG, header_value(catalog)?);
        }
        if let Some(schema) = &self.session.schema {
            headers.insert(HEADER_SCHEMA, header_value(schema)?);
        }
        Ok(headers)
    }

    fn apply_session_update(&mut self, headers: &HeaderMap) {
        if let Some(catalog) = headers.get(HEADER_SET_CATALOG).and_then(|v| v.to_str().ok()) {
            tracing::debug!(catalog, "session catalog changed");
            self.session.catalog = Some(catalog.to_string());
        }
        if let Some(schema) = headers.get(HEADER_SET_SCHEMA).and_then(|v| v.to_str().ok()) {
            tracing::debug!(schema, "session schema changed");
            self.session.schema = Some(schema.to_string());
        }
    }

    fn read_page(&mut self, response: Response) -> Result<QueryResults, TrinoError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TrinoError::Status {
                status: status.as_u16(),
                body,
            });
        }
        self.apply_session_update(response.headers());
        Ok(response.json::<QueryResults>()?)
    }

    fn submit(&mut self, sql: &str) -> Result<QueryResults, TrinoError> {
        let response = self
            .http
            .post(self.statement_url.clone())
            .headers(self.request_headers()?)
            .body(sql.to_string())
            .send()?;
        self.read_page(response)
    }

    fn advance(&mut self, next_uri: &str) -> Result<QueryResults, TrinoError> {
        let response = self
            .http
            .get(next_uri)
            .headers(self.request_headers()?)
            .send()?;
        self.read_page(response)
    }

    /// Best-effort cancellation of a statement we stop following.
    fn cancel(&self, next_uri: &str) {
        match self.http.delete(next_uri).send() {
            Ok(_) => tracing::debug!(next_uri, "cancelled abandoned statement"),
            Err(err) => tracing::warn!(next_uri, %err, "failed to cancel statement"),
        }
    }

    fn run(&mut self, sql: &str) -> Result<QueryOutput, TrinoError> {
        let mut page = self.submit(sql)?;
        tracing::debug!(query_id = %page.id, "statement submitted");

        let mut output = QueryOutput::default();
        loop {
            absorb(&mut output, &mut page)?;
            let Some(next_uri) = page.next_uri.take() else {
                break;
            };
            page = match self.advance(&next_uri) {
                Ok(next) => next,
                Err(err) => {
                    self.cancel(&next_uri);
                    return Err(err);
                }
            };
        }

        tracing::debug!(
            query_id = %page.id,
            rows = output.rows.len(),
            update_count = ?output.update_count,
            "statement finished"
        );
        Ok(output)
    }
}

impl StatementExecutor for TrinoConnection {
    fn execute_with(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryOutput, TrinoError> {
        if params.is_empty() {
            self.run(sql)
        } else {
            self.run(&execute_immediate(sql, params))
        }
    }
}

fn header_value(text: &str) -> Result<HeaderValue, TrinoError> {
    HeaderValue::from_str(text).map_err(|_| TrinoError::Malformed(format!("invalid header value {:?}", text)))
}

/// Fold one page into the accumulated output, failing on a server-side error.
fn absorb(output: &mut QueryOutput, page: &mut QueryResults) -> Result<(), TrinoError> {
    if let Some(error) = page.error.take() {
        return Err(TrinoError::Query {
            name: error.error_name,
            message: error.message,
        });
    }
    if output.columns.is_empty() {
        if let Some(columns) = &page.columns {
            output.columns = columns.iter().map(|c| c.name.clone()).collect();
        }
    }
    if let Some(data) = page.data.take() {
        output.rows.extend(data);
    }
    if page.update_count.is_some() {
        output.update_count = page.update_count;
    }
    Ok(())
}
