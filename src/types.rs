//! 通用类型定义

/// 边权重（道路长度，单位不限，必须为非负有限值）
pub type Weight = f64;

/// 不可达顶点的距离
pub const UNREACHABLE: Weight = f64::INFINITY;

/// 检查权重是否可用于 Dijkstra（非负且有限）
pub fn is_valid_weight(weight: Weight) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// 判断距离是否可达
pub fn is_reachable_distance(distance: Weight) -> bool {
    distance.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_validation() {
        assert!(is_valid_weight(0.0));
        assert!(is_valid_weight(3.5));
        assert!(!is_valid_weight(-1.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }

    #[test]
    fn test_unreachable_distance() {
        assert!(!is_reachable_distance(UNREACHABLE));
        assert!(is_reachable_distance(14.0));
    }
}
