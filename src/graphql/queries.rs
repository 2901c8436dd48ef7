/// A named GraphQL document with the root field its result lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub root_field: &'static str,
    pub document: &'static str,
}

pub const CREATE_USER: Operation = Operation {
    name: "CreateUser",
    root_field: "createUser",
    document: r#"mutation CreateUser($input: CreateUserInput!) {
    createUser(input: $input) {
        user { id firstName lastName email createdAt updatedAt }
        token { value }
    }
}"#,
};

pub const LOGIN: Operation = Operation {
    name: "Login",
    root_field: "login",
    document: r#"mutation Login($input: LoginInput!) {
    login(input: $input) {
        user { id firstName lastName email createdAt updatedAt }
        token { value }
    }
}"#,
};

pub const CANCEL_TOKEN: Operation = Operation {
    name: "CancelToken",
    root_field: "cancelToken",
    document: "mutation CancelToken { cancelToken }",
};

pub const REFRESH_TOKEN: Operation = Operation {
    name: "RefreshToken",
    root_field: "refreshToken",
    document: r#"mutation RefreshToken($input: RefreshTokenInput!) {
    refreshToken(input: $input)
}"#,
};

pub const STORE_ANALYZE_REQUEST: Operation = Operation {
    name: "StoreAnalyzeRequest",
    root_field: "storeAnalyzeRequest",
    document: r#"mutation StoreAnalyzeRequest($input: StoreAnalyzeRequestInput!) {
    storeAnalyzeRequest(input: $input)
}"#,
};

pub const ANALYZE_REQUESTS: Operation = Operation {
    name: "AnalyzeRequests",
    root_field: "analyzeRequests",
    document: r#"query AnalyzeRequests($take: Int, $skip: Int, $orderBy: String, $orderDirection: String) {
    analyzeRequests(take: $take, skip: $skip, orderBy: $orderBy, orderDirection: $orderDirection) {
        id
        ovChipkaartNumber
        startDate
        endDate
        status
        createdAt
        updatedAt
    }
}"#,
};
