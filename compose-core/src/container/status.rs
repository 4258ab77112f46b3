use super::types::{CompositeStatus, PsRecord, ServiceState};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// 解析后的 `ps` 输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PsReport {
    /// 服务名 -> 归一化状态
    pub states: HashMap<String, ServiceState>,
    /// 无法解析的行数
    pub malformed_lines: usize,
}

impl PsReport {
    /// 查询服务状态，从未创建过容器的服务视为已停止
    pub fn state_of(&self, service_name: &str) -> ServiceState {
        self.states
            .get(service_name)
            .copied()
            .unwrap_or(ServiceState::Stopped)
    }

    fn record(&mut self, record: PsRecord) {
        let state = ServiceState::from_compose_state(&record.state);
        debug!("服务 {} 状态 {:?} -> {:?}", record.service, record.state, state);

        // 同一服务的多个副本：错误一旦出现就保持，否则以最后一条为准
        match self.states.get(&record.service) {
            Some(ServiceState::Error) => {}
            _ => {
                self.states.insert(record.service, state);
            }
        }
    }
}

/// 解析 `docker compose ps -a --format=json` 的输出
///
/// 每个非空行是一个 JSON 对象；较旧的 compose 版本会在一行中输出 JSON 数组，同样接受。
pub fn parse_ps_output(output: &str) -> PsReport {
    let mut report = PsReport::default();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parsed = if line.starts_with('[') {
            serde_json::from_str::<Vec<PsRecord>>(line)
        } else {
            serde_json::from_str::<PsRecord>(line).map(|record| vec![record])
        };

        match parsed {
            Ok(records) => records.into_iter().for_each(|r| report.record(r)),
            Err(e) => {
                warn!("无法解析 ps 输出行 {:?}: {}", line, e);
                report.malformed_lines += 1;
            }
        }
    }

    report
}

/// 聚合多个服务状态
///
/// 全部相同则返回该状态；否则只要有错误就返回错误；其余情况为部分运行。
/// 空输入返回错误。
pub fn aggregate<I>(states: I) -> CompositeStatus
where
    I: IntoIterator<Item = ServiceState>,
{
    let unique: HashSet<ServiceState> = states.into_iter().collect();

    if unique.len() == 1 {
        return unique
            .into_iter()
            .next()
            .map(CompositeStatus::from)
            .unwrap_or(CompositeStatus::Error);
    }

    if unique.is_empty() || unique.contains(&ServiceState::Error) {
        CompositeStatus::Error
    } else {
        CompositeStatus::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_classification() {
        let cases = [
            ("running", ServiceState::Running),
            ("Running", ServiceState::Running),
            ("exited", ServiceState::Stopped),
            ("stopped", ServiceState::Stopped),
            ("dead", ServiceState::Stopped),
            ("starting", ServiceState::Starting),
            ("created", ServiceState::Starting),
            ("removing", ServiceState::Stopping),
            ("paused", ServiceState::Stopping),
            ("restarting", ServiceState::Stopping),
            ("", ServiceState::Error),
            ("unhealthy", ServiceState::Error),
        ];

        for (raw, expected) in cases {
            assert_eq!(ServiceState::from_compose_state(raw), expected, "state {raw:?}");
        }
    }

    #[test]
    fn test_parse_ndjson_output() {
        let output = r#"{"Name":"app-web-1","Service":"web","State":"running"}

{"Name":"app-db-1","Service":"db","State":"exited"}
"#;
        let report = parse_ps_output(output);

        assert_eq!(report.malformed_lines, 0);
        assert_eq!(report.state_of("web"), ServiceState::Running);
        assert_eq!(report.state_of("db"), ServiceState::Stopped);
        assert_eq!(report.state_of("cache"), ServiceState::Stopped);
    }

    #[test]
    fn test_parse_array_output() {
        let output = r#"[{"Service":"web","State":"running"},{"Service":"worker","State":"restarting"}]"#;
        let report = parse_ps_output(output);

        assert_eq!(report.states.len(), 2);
        assert_eq!(report.state_of("worker"), ServiceState::Stopping);
    }

    #[test]
    fn test_parse_malformed_line() {
        let output = "{\"Service\":\"web\",\"State\":\"running\"}\nnot json\n{\"State\":\"running\"}\n";
        let report = parse_ps_output(output);

        assert_eq!(report.malformed_lines, 2);
        assert_eq!(report.state_of("web"), ServiceState::Running);
    }

    #[test]
    fn test_replica_error_sticks() {
        let output = r#"{"Service":"web","State":"oom"}
{"Service":"web","State":"running"}
{"Service":"db","State":"created"}
{"Service":"db","State":"running"}"#;
        let report = parse_ps_output(output);

        assert_eq!(report.state_of("web"), ServiceState::Error);
        assert_eq!(report.state_of("db"), ServiceState::Running);
    }

    #[test]
    fn test_aggregate_identical_states() {
        for state in [
            ServiceState::Starting,
            ServiceState::Running,
            ServiceState::Stopping,
            ServiceState::Stopped,
            ServiceState::Error,
        ] {
            assert_eq!(aggregate([state, state, state]), CompositeStatus::from(state));
        }
    }

    #[test]
    fn test_aggregate_error_dominates() {
        assert_eq!(
            aggregate([ServiceState::Running, ServiceState::Error, ServiceState::Stopped]),
            CompositeStatus::Error
        );
        assert_eq!(
            aggregate([ServiceState::Stopped, ServiceState::Error]),
            CompositeStatus::Error
        );
    }

    #[test]
    fn test_aggregate_partial() {
        assert_eq!(
            aggregate([ServiceState::Running, ServiceState::Stopped]),
            CompositeStatus::Partial
        );
        assert_eq!(
            aggregate([ServiceState::Starting, ServiceState::Running, ServiceState::Running]),
            CompositeStatus::Partial
        );
    }

    #[test]
    fn test_aggregate_empty_is_error() {
        assert_eq!(aggregate(Vec::<ServiceState>::new()), CompositeStatus::Error);
    }
}
