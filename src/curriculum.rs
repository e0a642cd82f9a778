//! Static curriculum tables: which subjects each semester teaches and the
//! reference material attached to every subject.

use serde::Serialize;

use crate::error::PerformanceError;
use crate::models::{Semester, Subject};

use Subject::*;

const SEMESTER_1: &[Subject] = &[
    CProgramming,
    DifferentialEquations,
    FundamentalsOfIt,
    DescriptiveStatistics,
    GeneralEnglish1,
    ValueEducation,
];
const SEMESTER_2: &[Subject] = &[
    DsThroughC,
    ProbabilityDistributions,
    AbstractAlgebra,
    OperatingSystems,
    GeneralEnglish2,
    IndianHeritageAndCulture,
];
const SEMESTER_3: &[Subject] = &[
    DatabaseManagementSystems,
    ComputerOrganizations,
    Python,
    StatisticalMethods,
    EnvironmentalStudies,
];
const SEMESTER_4: &[Subject] = &[
    Java,
    StatisticalInference,
    ComputerNetworks,
    RProgramming,
    DataWarehousing,
    AccountingAndFinancialManagement,
];
const SEMESTER_5: &[Subject] = &[
    ArtificialIntelligence,
    MachineLearning,
    AppliedStatistics,
    SoftwareEngineering,
    OperationsResearch,
    DataVisualizationTools,
];
const SEMESTER_6: &[Subject] = &[
    DataSecurity,
    BigDataAnalytics,
    SoftwareTesting,
    CloudComputing,
    MarketingDataAnalytics,
];

const BOOKS: &[(Subject, &str)] = &[
    (CProgramming, "The C Programming Language by Kernighan and Ritchie"),
    (DifferentialEquations, "Elementary Differential Equations by Boyce and DiPrima"),
    (FundamentalsOfIt, "Introduction to Information Technology by Turban, Rainer and Potter"),
    (DescriptiveStatistics, "Statistics for Engineers and Scientists by William Navidi"),
    (GeneralEnglish1, "Epitome of Wisdom by Maruthi Publications"),
    (ValueEducation, "Human Values - Development Program by AIACHE"),
    (DsThroughC, "Data Structures Using C by Aaron M. Tenenbaum"),
    (ProbabilityDistributions, "Introduction to Probability and Statistics by Mendenhall and Beaver"),
    (AbstractAlgebra, "Abstract Algebra by David S. Dummit and Richard M. Foote"),
    (OperatingSystems, "Operating System Concepts by Silberschatz, Galvin, and Gagne"),
    (GeneralEnglish2, "Epitome of Wisdom by Maruthi Publications"),
    (IndianHeritageAndCulture, "The Wonder That Was India by A.L. Basham"),
    (DatabaseManagementSystems, "Database System Concepts by Silberschatz, Korth, and Sudarshan"),
    (ComputerOrganizations, "Computer Organization and Design by Patterson and Hennessy"),
    (Python, "Automate the Boring Stuff with Python by Al Sweigart"),
    (StatisticalMethods, "Statistics for Engineers and Scientists by William Navidi"),
    (EnvironmentalStudies, "Environmental Studies by Benny Joseph"),
    (Java, "Effective Java by Joshua Bloch"),
    (StatisticalInference, "Statistical Inference by Casella and Berger"),
    (ComputerNetworks, "A Top-Down Approach by Kurose and Ross"),
    (RProgramming, "R for Data Science by Wickham and Grolemund"),
    (DataWarehousing, "The Data Warehouse Toolkit by Ralph Kimball"),
    (AccountingAndFinancialManagement, "Financial Accounting by Libby, Libby, and Short"),
    (ArtificialIntelligence, "Artificial Intelligence: A Modern Approach by Russell and Norvig"),
    (MachineLearning, "Pattern Recognition and Machine Learning by Christopher M. Bishop"),
    (AppliedStatistics, "Applied Statistics and Probability for Engineers by Montgomery and Runger"),
    (SoftwareEngineering, "Software Engineering by Ian Sommerville"),
    (OperationsResearch, "Introduction to Operations Research by Hillier and Lieberman"),
    (DataVisualizationTools, "Storytelling with Data by Cole Nussbaumer Knaflic"),
    (DataSecurity, "Introduction to Algorithms by Cormen, Leiserson, Rivest, and Stein"),
    (BigDataAnalytics, "Big Data: A Revolution That Will Transform How We Live by Mayer-Schönberger"),
    (SoftwareTesting, "Software Testing by Ron Patton"),
    (CloudComputing, "Cloud Computing: Concepts, Technology & Architecture by Thomas Erl"),
    (MarketingDataAnalytics, "Marketing Analytics by Winston"),
];

// Comma separated; split and trimmed by `reference_for`.
const TOPICS: &[(Subject, &str)] = &[
    (CProgramming, "Pointers, programming constructs, Control structures, Functions, Arrays and strings, Pointers and file handling"),
    (DifferentialEquations, "First Order Differential Equations, Applications of differential equations, Interpolation"),
    (FundamentalsOfIt, "Computer terminology and number systems, Modern communication technologies, Applications of IT"),
    (DescriptiveStatistics, "Measures of central tendency, Measures of dispersion, Random variables, Probability basics"),
    (GeneralEnglish1, "Fundamentals of communication, Language proficiency, Writing skills"),
    (ValueEducation, "Ethics, Moral values, Personality development, Life skills"),
    (DsThroughC, "Arrays, Linked Lists, Stacks, Queues, Searching and sorting, Graphs, Trees"),
    (ProbabilityDistributions, "Binomial, Poisson, Normal Distributions, Sampling distributions"),
    (AbstractAlgebra, "Group theory, Normal subgroups, Permutations, Linear equation, Eigenvalues and eigenvectors"),
    (OperatingSystems, "Process Management, Memory Management, File systems, Deadlocks"),
    (GeneralEnglish2, "Advanced communication skills, Literary appreciation, Functional grammar"),
    (IndianHeritageAndCulture, "The Indus Valley Civilization, Vedic culture, Major empires, Religious traditions, Art, Architecture"),
    (DatabaseManagementSystems, "SQL, Normalization, Indexing, Relational database concepts, NoSQL basics"),
    (ComputerOrganizations, "CPU Architecture, Memory Hierarchy, Input/output systems"),
    (Python, "Basic syntax, Libraries, Data manipulation, Object-oriented programming"),
    (StatisticalMethods, "Hypothesis testing, Regression analysis, Non-parametric tests, ANOVA"),
    (EnvironmentalStudies, "Environmental awareness, Sustainable development, Gender issues"),
    (Java, "OOP, Exception Handling, Multithreading"),
    (StatisticalInference, "Likelihood ratio tests, Bayesian inference, Hypothesis testing"),
    (ComputerNetworks, "Input/output systems, Memory hierarchy, CPU architecture"),
    (RProgramming, "Statistical functions, Visualization, Basic syntax"),
    (DataWarehousing, "Data warehouse architecture, OLAP, Association rules, Evaluation metrics"),
    (AccountingAndFinancialManagement, "Balance Sheets, Income Statements"),
    (ArtificialIntelligence, "Search Algorithms, Knowledge Representation, Adversarial search, Expert systems"),
    (MachineLearning, "Supervised Learning, Unsupervised Learning, Model evaluation, Neural networks"),
    (AppliedStatistics, "Discriminant analysis, Time Series Analysis, Factor analysis, Growth curves"),
    (SoftwareEngineering, "Requirements engineering, SDLC, Testing methodologies"),
    (OperationsResearch, "Linear Programming, Network flows, Transportation and assignment problems"),
    (DataVisualizationTools, "Tools, Visualization principles, Visualizing complex data"),
    (DataSecurity, "Firewalls, Security attacks, Encryption"),
    (BigDataAnalytics, "Hadoop Ecosystem, HBase, Hive, Pig, NoSQL"),
    (SoftwareTesting, "Testing types, Test case design, Quality metrics"),
    (CloudComputing, "Cloud model, Virtualization, Cloud architecture"),
    (MarketingDataAnalytics, "Market research, Market basket analysis, Customer segmentation"),
];

const SYLLABUS_FILES: &[(Subject, &str)] = &[
    (AbstractAlgebra, "Abstract_Algebra_Syllabus.pdf"),
    (AccountingAndFinancialManagement, "Accounting_And_Financial_Management_Syllabus.pdf"),
    (AppliedStatistics, "Applied_statistics_Syllabus.pdf"),
    (ArtificialIntelligence, "Artificial_Intelligence_Syllabus.pdf"),
    (BigDataAnalytics, "Big_Data_Analytics_Syllabus.pdf"),
    (CProgramming, "C_Programming_Syllabus.pdf"),
    (CloudComputing, "Cloud_Computing_Syllabus.pdf"),
    (ComputerNetworks, "Computer_Networks_Syllabus.pdf"),
    (ComputerOrganizations, "Computer_Organizations_Syllabus.pdf"),
    (DataSecurity, "Data_Security_Syllabus.pdf"),
    (DataVisualizationTools, "Data_Visualization_Tools_Syllabus.pdf"),
    (DataWarehousing, "Data_Warehousing_Syllabus.pdf"),
    (DatabaseManagementSystems, "Database_Management_Systems_Syllabus.pdf"),
    (DescriptiveStatistics, "Descriptive_Statistics_Syllabus.pdf"),
    (DifferentialEquations, "Differential_Equations_Syllabus.pdf"),
    (DsThroughC, "DS_through_C_Syllabus.pdf"),
    (EnvironmentalStudies, "Environmental_Studies_Syllabus.pdf"),
    (FundamentalsOfIt, "Fundamentals_of_IT_Syllabus.pdf"),
    (GeneralEnglish1, "General_English_1_Syllabus.pdf"),
    (GeneralEnglish2, "General_English_2_Syllabus.pdf"),
    (IndianHeritageAndCulture, "Indian_Heritage_And_Culture_Syllabus.pdf"),
    (Java, "Java_Syllabus.pdf"),
    (MachineLearning, "Machine_Learning_Syllabus.pdf"),
    (MarketingDataAnalytics, "Marketing_Data_Analytics_Syllabus.pdf"),
    (OperatingSystems, "Operating_Systems_Syllabus.pdf"),
    (OperationsResearch, "Operations_Research_Syllabus.pdf"),
    (ProbabilityDistributions, "Probability_Distributions_Syllabus.pdf"),
    (Python, "Python_Syllabus.pdf"),
    (RProgramming, "R_Programming_Syllabus.pdf"),
    (SoftwareEngineering, "Software_Engineering_Syllabus.pdf"),
    (SoftwareTesting, "Software_Testing_Syllabus.pdf"),
    (StatisticalInference, "Statistical_Inference_Syllabus.pdf"),
    (StatisticalMethods, "Statistical_Methods_Syllabus.pdf"),
    (ValueEducation, "Value_Education_Syllabus.pdf"),
];

/// Reference material for one subject. Any field may be empty when the
/// tables carry no entry for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectReference {
    pub book: Option<&'static str>,
    pub topics: Vec<&'static str>,
    pub syllabus_file: Option<&'static str>,
}

impl Semester {
    /// Subjects of this semester in display order.
    pub fn subjects(self) -> &'static [Subject] {
        match self.number() {
            1 => SEMESTER_1,
            2 => SEMESTER_2,
            3 => SEMESTER_3,
            4 => SEMESTER_4,
            5 => SEMESTER_5,
            _ => SEMESTER_6,
        }
    }

    pub fn teaches(self, subject: Subject) -> bool {
        self.subjects().contains(&subject)
    }
}

pub fn subjects_for(semester: u8) -> Result<&'static [Subject], PerformanceError> {
    Semester::new(semester).map(Semester::subjects)
}

pub fn reference_for(subject: Subject) -> SubjectReference {
    SubjectReference {
        book: lookup(BOOKS, subject),
        topics: lookup(TOPICS, subject)
            .map(split_topics)
            .unwrap_or_default(),
        syllabus_file: lookup(SYLLABUS_FILES, subject),
    }
}

fn lookup(table: &[(Subject, &'static str)], subject: Subject) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == subject)
        .map(|(_, value)| *value)
}

fn split_topics(raw: &'static str) -> Vec<&'static str> {
    raw.split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .collect()
}
