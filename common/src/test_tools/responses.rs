//! Canned query-protocol (XML) response bodies for the AWS services this
//! project talks to. Documents are written without whitespace between tags.

const AUTOSCALING_NAMESPACE: &str = "http://autoscaling.amazonaws.com/doc/2011-01-01/";

fn members(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<member>{item}</member>"))
        .collect()
}

/// `DescribeAutoScalingGroups` response listing one group per entry of `groups`,
/// each given as `(name, load balancer names, target group arns)`.
pub fn describe_auto_scaling_groups_response(groups: &[(&str, &[&str], &[&str])]) -> String {
    let groups: String = groups
        .iter()
        .map(|(name, load_balancers, target_groups)| {
            format!(
                "<member>\
                 <AutoScalingGroupName>{name}</AutoScalingGroupName>\
                 <LaunchConfigurationName>lc-{name}</LaunchConfigurationName>\
                 <MinSize>1</MinSize>\
                 <MaxSize>3</MaxSize>\
                 <DesiredCapacity>2</DesiredCapacity>\
                 <DefaultCooldown>300</DefaultCooldown>\
                 <AvailabilityZones><member>us-east-1a</member></AvailabilityZones>\
                 <LoadBalancerNames>{}</LoadBalancerNames>\
                 <TargetGroupARNs>{}</TargetGroupARNs>\
                 <HealthCheckType>EC2</HealthCheckType>\
                 <CreatedTime>2024-01-01T00:00:00.000Z</CreatedTime>\
                 </member>",
                members(load_balancers),
                members(target_groups),
            )
        })
        .collect();

    format!(
        "<DescribeAutoScalingGroupsResponse xmlns=\"{AUTOSCALING_NAMESPACE}\">\
         <DescribeAutoScalingGroupsResult>\
         <AutoScalingGroups>{groups}</AutoScalingGroups>\
         </DescribeAutoScalingGroupsResult>\
         <ResponseMetadata><RequestId>mock-request</RequestId></ResponseMetadata>\
         </DescribeAutoScalingGroupsResponse>"
    )
}

/// Query-protocol error document as returned with a non 2xx status.
pub fn error_response(code: &str, message: &str) -> String {
    format!(
        "<ErrorResponse>\
         <Error><Type>Sender</Type><Code>{code}</Code><Message>{message}</Message></Error>\
         <RequestId>mock-request</RequestId>\
         </ErrorResponse>"
    )
}
