/// Load balancing attachments of an auto scaling group, as returned by a describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalingGroup {
    pub name: String,
    pub load_balancer_names: Vec<String>,
    pub target_group_arns: Vec<String>,
}

impl ScalingGroup {
    pub fn new(
        name: impl Into<String>,
        load_balancer_names: Vec<String>,
        target_group_arns: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            load_balancer_names,
            target_group_arns,
        }
    }

    /// True when nothing routes traffic to the group's instances.
    pub fn has_no_attachments(&self) -> bool {
        self.load_balancer_names.is_empty() && self.target_group_arns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ScalingGroup;

    #[test]
    fn group_without_balancers_has_no_attachments() {
        let group = ScalingGroup::new("asg-1", vec![], vec![]);
        assert!(group.has_no_attachments());
    }

    #[test]
    fn group_with_target_group_has_attachments() {
        let group = ScalingGroup::new("asg-1", vec![], vec!["tg-arn-1".to_owned()]);
        assert!(!group.has_no_attachments());
    }
}
