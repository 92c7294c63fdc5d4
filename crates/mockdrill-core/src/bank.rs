//! The built-in question catalog and sampling helpers.
//!
//! The catalog is static reference data: 45 questions across the four
//! topics, defined once and never mutated.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Question, Topic};

fn q(qid: u32, topic: Topic, prompt: &str, keywords: &[&str]) -> Question {
    Question {
        qid,
        topic,
        prompt: prompt.to_string(),
        expected_keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// The full built-in catalog, qids 1 through 45.
pub fn question_bank() -> Vec<Question> {
    use Topic::{Algorithms as Dsa, Behavioral, Networking as Cn, OperatingSystems as Os};

    vec![
        q(1, Dsa, "Explain the time and space complexity of binary search and when it works.", &["sorted", "log", "divide", "middle", "o(log n)"]),
        q(2, Dsa, "How does a hash table handle collisions?", &["collision", "chaining", "open addressing", "rehashing"]),
        q(3, Dsa, "What is the difference between BFS and DFS, and where would you use each?", &["queue", "stack", "shortest path", "traversal", "graph"]),
        q(4, Dsa, "Describe merge sort and its complexity.", &["divide and conquer", "merge", "o(n log n)", "stable"]),
        q(5, Dsa, "When would you choose a heap over a balanced BST?", &["priority queue", "top k", "insert", "extract min", "extract max"]),
        q(6, Dsa, "What is dynamic programming? Explain overlapping subproblems and optimal substructure.", &["memoization", "tabulation", "overlapping", "optimal substructure"]),
        q(7, Dsa, "Explain two-pointer technique with an example problem.", &["left", "right", "sorted", "linear", "window"]),
        q(8, Dsa, "How would you detect a cycle in a linked list?", &["fast", "slow", "floyd", "tortoise", "hare"]),
        q(9, Cn, "What is the TCP three-way handshake?", &["syn", "ack", "sequence", "connection establishment"]),
        q(10, Cn, "Differentiate TCP and UDP with practical use cases.", &["reliable", "connectionless", "latency", "streaming", "ordering"]),
        q(11, Cn, "What happens when you type a URL in a browser?", &["dns", "tcp", "tls", "http", "request", "response"]),
        q(12, Cn, "Explain subnetting and why it is useful.", &["ip", "network", "host", "mask", "cidr"]),
        q(13, Cn, "What are HTTP status code categories?", &["1xx", "2xx", "3xx", "4xx", "5xx"]),
        q(14, Cn, "How does DNS resolution work at a high level?", &["resolver", "root", "tld", "authoritative", "cache"]),
        q(15, Os, "What is a process vs a thread?", &["address space", "lightweight", "context switch", "shared memory"]),
        q(16, Os, "Explain deadlock and the four Coffman conditions.", &["mutual exclusion", "hold and wait", "no preemption", "circular wait"]),
        q(17, Os, "How does virtual memory work?", &["paging", "page table", "swap", "frame"]),
        q(18, Os, "What is context switching and why is it expensive?", &["cpu", "register", "scheduler", "overhead"]),
        q(19, Os, "Explain producer-consumer problem and one synchronization solution.", &["semaphore", "mutex", "buffer", "critical section"]),
        q(20, Os, "Compare FCFS, SJF, and Round Robin scheduling.", &["waiting time", "turnaround", "quantum", "preemptive"]),
        q(21, Behavioral, "Tell me about yourself and your recent project impact.", &["role", "impact", "result", "team"]),
        q(22, Behavioral, "Describe a challenging bug you fixed. How did you approach it?", &["situation", "analysis", "action", "result"]),
        q(23, Behavioral, "Tell me about a time you handled conflict in a team.", &["communication", "empathy", "resolution", "outcome"]),
        q(24, Behavioral, "Describe a failure and what you learned from it.", &["ownership", "learning", "improvement", "result"]),
        q(25, Behavioral, "Why should we hire you for this role?", &["strength", "fit", "value", "impact"]),
        q(26, Dsa, "How does quicksort work, and what are its best and worst-case complexities?", &["pivot", "partition", "o(n log n)", "o(n^2)"]),
        q(27, Dsa, "Explain the difference between an array and a linked list.", &["contiguous", "pointer", "insertion", "access"]),
        q(28, Dsa, "How would you find the kth largest element efficiently?", &["heap", "quickselect", "partition", "top k"]),
        q(29, Dsa, "What is a monotonic stack and where is it used?", &["next greater", "increasing", "decreasing", "linear"]),
        q(30, Dsa, "Explain sliding window technique with a substring problem example.", &["window", "expand", "shrink", "two pointers"]),
        q(31, Cn, "What is TLS and why is it used over plain HTTP?", &["encryption", "certificate", "handshake", "https"]),
        q(32, Cn, "Explain the purpose of NAT in networks.", &["private ip", "public ip", "translation", "router"]),
        q(33, Cn, "What is the difference between hub, switch, and router?", &["broadcast", "mac", "ip", "forwarding"]),
        q(34, Cn, "How does congestion control work in TCP?", &["window", "slow start", "avoidance", "packet loss"]),
        q(35, Cn, "What is CDN and how does it improve web performance?", &["edge", "latency", "cache", "distributed"]),
        q(36, Os, "What is the role of system calls in an operating system?", &["kernel", "user mode", "interface", "privileged"]),
        q(37, Os, "Explain paging vs segmentation.", &["page", "segment", "address translation", "fragmentation"]),
        q(38, Os, "What is starvation and how is it different from deadlock?", &["priority", "indefinite waiting", "scheduling", "progress"]),
        q(39, Os, "How do mutex and semaphore differ?", &["locking", "counting", "critical section", "synchronization"]),
        q(40, Os, "What is thrashing in memory management?", &["page fault", "working set", "swap", "performance"]),
        q(41, Behavioral, "Tell me about a time you took ownership without being asked.", &["ownership", "initiative", "impact", "result"]),
        q(42, Behavioral, "Describe a situation where requirements changed late. What did you do?", &["adapt", "communication", "prioritize", "delivery"]),
        q(43, Behavioral, "How do you handle tight deadlines and stress?", &["planning", "prioritization", "communication", "focus"]),
        q(44, Behavioral, "Give an example of mentoring or helping a teammate grow.", &["mentoring", "support", "feedback", "outcome"]),
        q(45, Behavioral, "Describe a decision you made with incomplete information.", &["tradeoff", "assumption", "risk", "result"]),
    ]
}

/// The sorted set of distinct topics present in a bank.
pub fn question_topics(bank: &[Question]) -> Vec<Topic> {
    let mut topics: Vec<Topic> = bank.iter().map(|q| q.topic).collect();
    topics.sort_unstable();
    topics.dedup();
    topics
}

/// Look up a question by id.
pub fn find_question(bank: &[Question], qid: u32) -> Option<&Question> {
    bank.iter().find(|q| q.qid == qid)
}

/// Uniformly sample `count` distinct questions without replacement.
///
/// Returns `min(count, bank.len())` questions via a Fisher-Yates shuffle.
/// Callers that need reproducible sessions pass a seeded RNG.
pub fn sample_questions<R: Rng>(bank: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let mut questions: Vec<Question> = bank.to_vec();
    questions.shuffle(rng);
    questions.truncate(count.min(bank.len()));
    questions
}
