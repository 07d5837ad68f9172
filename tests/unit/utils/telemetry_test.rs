// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use spellgate::utils::telemetry;

    #[test]
    fn test_telemetry_initialization() {
        // 初始化遥测系统
        telemetry::init_telemetry(0);
        assert!(tracing::dispatcher::has_been_set());
        // 重复初始化不应 panic
        telemetry::init_telemetry(2);
        assert!(tracing::dispatcher::has_been_set());

        tracing::debug!("This is a debug message");
        tracing::info!(url = "/about/", findings = 2, "Page checked");
        tracing::warn!(url = "/a/", error = "Timeout", "Skipping page");
    }

    #[test]
    fn test_default_filter_by_verbosity() {
        assert_eq!(telemetry::default_filter(0), "warn,spellgate=info");
        assert_eq!(telemetry::default_filter(1), "warn,spellgate=debug");
        assert_eq!(telemetry::default_filter(5), "info,spellgate=trace");
    }
}
